// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use badical_core::{MAX_GREGORIAN_YEAR, MIN_GREGORIAN_YEAR};
use clap::{Arg, ArgMatches, arg, value_parser};

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ArgOutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(ArgOutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> ArgOutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(ArgOutputFormat::Table)
    }

    pub fn year() -> Arg {
        arg!(year: <YEAR> "Gregorian year")
            .long_help(format!(
                "Gregorian year, from {MIN_GREGORIAN_YEAR} to {MAX_GREGORIAN_YEAR}"
            ))
            .value_parser(
                value_parser!(i64)
                    .range(i64::from(MIN_GREGORIAN_YEAR)..=i64::from(MAX_GREGORIAN_YEAR)),
            )
    }

    pub fn get_year(matches: &ArgMatches) -> i64 {
        match matches.get_one::<i64>("year") {
            Some(year) => *year,
            None => unreachable!("year is required"),
        }
    }

    pub fn lang() -> Arg {
        arg!(-l --lang <LANG> "Language of titles and descriptions: en or es")
            .long_help(
                "\
Language of titles and descriptions: en or es. Defaults to the configured default language; \
unsupported languages fall back to English.",
            )
    }

    pub fn get_lang(matches: &ArgMatches) -> Option<String> {
        matches.get_one("lang").cloned()
    }
}
