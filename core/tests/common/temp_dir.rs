// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary translation directories for integration tests.

use std::path::{Path, PathBuf};

use tokio::fs;

/// A directory holding copies of the embedded translation tables.
///
/// Automatically cleans up when dropped.
#[derive(Debug)]
pub struct TranslationDir {
    path: PathBuf,
}

impl TranslationDir {
    /// Creates a directory with `en.json` and `es.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let path = tempfile::tempdir()?.keep();
        fs::write(path.join("en.json"), include_str!("../../data/en.json")).await?;
        fs::write(path.join("es.json"), include_str!("../../data/es.json")).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces a table with new content.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub async fn write(&self, name: &str, content: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(self.path.join(name), content).await?;
        Ok(())
    }

    /// Removes a table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be removed.
    pub async fn remove(&self, name: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::remove_file(self.path.join(name)).await?;
        Ok(())
    }
}

impl Drop for TranslationDir {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_dir_all(&self.path) {
            tracing::warn!(path = %self.path.display(), err = %e, "failed to clean up temp directory");
        }
    }
}
