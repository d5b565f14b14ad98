// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use badical_core::Badical;
use clap::{ArgMatches, Command};
use colored::Colorize;

use crate::arg::{ArgOutputFormat, CommonArgs};
use crate::event_formatter::EventFormatter;
use crate::month_formatter::MonthFormatter;

#[derive(Debug, Clone)]
pub struct CmdComplete {
    pub year: i64,
    pub lang: Option<String>,
    pub output_format: ArgOutputFormat,
}

impl CmdComplete {
    pub const NAME: &str = "complete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show events, month starts and the Fast of a Gregorian year together")
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
        tracing::debug!(?self, "computing the complete year...");
        let query = badical.query(self.year, self.lang.as_deref())?;
        let complete = badical.complete(&query)?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&complete)?),
            ArgOutputFormat::Table => {
                println!("🗓️ {}", "Events".bold());
                print!("{}", EventFormatter::new().format(&complete.events));
                println!();

                println!("🌙 {}", "Months".bold());
                print!("{}", MonthFormatter::new().format(&complete.months));

                if let Some(fast) = complete.fast {
                    println!();
                    println!("{} {} ~ {}", "Fast:".bold(), fast.start, fast.end);
                }
            }
        }
        Ok(())
    }
}
