// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the badical-core crate.
//!
//! These tests validate multi-step workflows that integrate multiple components,
//! from configuration through computation to calendar files.

mod config_driven;
mod ics_export;
