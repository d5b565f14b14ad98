// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use badical_core::{Badical, LocalizedEvent};
use clap::{ArgMatches, Command};

use crate::arg::{ArgOutputFormat, CommonArgs};
use crate::event_formatter::EventFormatter;

#[derive(Debug, Clone)]
pub struct CmdEvents {
    pub year: i64,
    pub lang: Option<String>,
    pub output_format: ArgOutputFormat,
    pub verbose: bool,
}

impl CmdEvents {
    pub const NAME: &str = "events";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("e")
            .about("List holy days, feasts, intercalary days and the Fast of a Gregorian year")
            .arg(CommonArgs::year())
            .arg(CommonArgs::lang())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: CommonArgs::get_year(matches),
            lang: CommonArgs::get_lang(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, badical: &Badical) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let query = badical.query(self.year, self.lang.as_deref())?;
        let events = badical.events(&query)?;

        match self.output_format {
            ArgOutputFormat::Json => {
                let output = YearEvents {
                    year: query.year(),
                    events: &events,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            ArgOutputFormat::Table => {
                let formatter = EventFormatter::new().verbose(self.verbose);
                print!("{}", formatter.format(&events));
            }
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize)]
struct YearEvents<'a> {
    year: i16,
    events: &'a [LocalizedEvent],
}
