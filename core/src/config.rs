// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::leap::OracleKind;
use crate::localization::Language;

/// The name of the application.
pub const APP_NAME: &str = "badical";

/// Configuration for the calendar engine.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language used when a request does not name one.
    pub default_language: Language,

    /// Directory holding `en.json` and `es.json` that replace the embedded translations.
    pub translations_dir: Option<PathBuf>,

    /// `PRODID` of exported calendars; defaults to `-//Bahá'í Calendar//<LANG>`.
    pub prod_id: Option<String>,

    /// `X-WR-CALNAME` of exported calendars; defaults to the translated calendar name.
    pub calendar_name: Option<String>,

    /// Which leap-year rule takes precedence.
    pub oracle: OracleKind,
}

impl Config {
    /// Expand `~` and well-known variables in configured paths.
    ///
    /// # Errors
    /// Returns [`Error::InvalidInput`] if a path cannot be expanded.
    pub fn normalize(&mut self) -> Result<(), Error> {
        if let Some(dir) = &self.translations_dir {
            let expanded = expand_path(dir).map_err(|e| {
                Error::InvalidInput(format!("failed to expand translations directory: {e}"))
            })?;
            self.translations_dir = Some(expanded);
        }
        Ok(())
    }

    /// `PRODID` for a calendar in the language.
    pub fn prod_id(&self, language: Language) -> String {
        match &self.prod_id {
            Some(prod_id) => prod_id.clone(),
            None => format!("-//Bahá'í Calendar//{}", language.code().to_uppercase()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: Language::Es,
            translations_dir: None,
            prod_id: None,
            calendar_name: None,
            oracle: OracleKind::default(),
        }
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, String> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle config directories
    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, String> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".to_string())
}

fn get_config_dir() -> Result<PathBuf, String> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".to_string())
}
