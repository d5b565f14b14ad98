// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line surface of the Badí calendar engine.

mod arg;
mod cli;
mod cmd_complete;
mod cmd_convert;
mod cmd_events;
mod cmd_fast;
mod cmd_generate_completion;
mod cmd_ics;
mod cmd_months;
mod cmd_year;
mod config;
mod event_formatter;
mod month_formatter;
mod table;

pub use crate::cli::{Cli, Commands, run};
