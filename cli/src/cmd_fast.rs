// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use badical_core::{Badical, BadiMonth};
use clap::{ArgMatches, Command};

use crate::arg::{ArgOutputFormat, CommonArgs};

#[derive(Debug, Clone)]
pub struct CmdFast {
    pub year: i64,
    pub output_format: ArgOutputFormat,
}

impl CmdFast {
    pub const NAME: &str = "fast";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the first and last day of the Fast observed in a Gregorian year")
            .arg(CommonArgs::year())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            year: CommonArgs::get_year(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, badical: &Badical) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "computing the Fast...");
        let query = badical.query(self.year, None)?;
        let fast = badical.fast(&query)?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&fast)?),
            ArgOutputFormat::Table => println!(
                "{} {}: {} ~ {}",
                BadiMonth::Ala.transliteration(),
                fast.badi_year,
                fast.start,
                fast.end
            ),
        }
        Ok(())
    }
}
