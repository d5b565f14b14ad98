// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Engine and query fixtures
//! - Custom assertion helpers
//! - Temporary translation directories with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_chronological, assert_folded};
#[allow(unused_imports)]
pub use fixtures::{english, engine, find_dates};
#[allow(unused_imports)]
pub use temp_dir::TranslationDir;
