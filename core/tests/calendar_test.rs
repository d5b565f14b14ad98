// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Entry point for calendar tests.
//!
//! Covers events, month starts and date conversion through the public engine.

mod calendar;
mod common;
