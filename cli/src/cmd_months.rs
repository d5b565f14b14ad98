// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use badical_core::{Badical, LocalizedMonth};
use clap::{ArgMatches, Command};

use crate::arg::{ArgOutputFormat, CommonArgs};
use crate::month_formatter::MonthFormatter;

#[derive(Debug, Clone)]
pub struct CmdMonths {
    pub year: i64,
    pub lang: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdMonths {
    pub const NAME: &str = "months";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("List the first day of each Badí month in a Gregorian year")
            .arg(CommonArgs::year())
            .arg(CommonArgs::lang())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: CommonArgs::get_year(matches),
            lang: CommonArgs::get_lang(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, badical: &Badical) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing month starts...");
        let query = badical.query(self.year, self.lang.as_deref())?;
        let months = badical.months(&query)?;

        match self.output_format {
            ArgOutputFormat::Json => {
                let output = YearMonths {
                    year: query.year(),
                    months: &months,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            ArgOutputFormat::Table => print!("{}", MonthFormatter::new().format(&months)),
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize)]
struct YearMonths<'a> {
    year: i16,
    months: &'a [LocalizedMonth],
}
