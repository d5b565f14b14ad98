// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Write and read the subset of iCalendar (RFC 5545) used by all-day calendar feeds.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else, clippy::match_bool)]

mod component;
pub mod formatter;
pub mod keyword;
mod lexer;
mod parser;
mod syntax;
pub mod value;

pub use crate::component::{ICalendar, TimeTransparency, UnrecognizedProperty, VEvent};
pub use crate::formatter::{FoldingStyle, FormatOptions, Formatter, format};
pub use crate::parser::{ParseError, parse};
pub use crate::value::{
    ValueDate, ValueDateTime, ValueError, escape_text, unescape_text, unescape_text_list,
};
