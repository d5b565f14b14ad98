// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use badical_core::{Badical, Language, MAX_BADI_YEAR, MIN_BADI_YEAR};
use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;

use crate::arg::{ArgOutputFormat, CommonArgs};
use crate::event_formatter::EventFormatter;

#[derive(Debug, Clone)]
pub struct CmdYear {
    pub badi_year: i32,
    pub lang: Option<String>,
    pub output_format: ArgOutputFormat,
    pub verbose: bool,
}

impl CmdYear {
    pub const NAME: &str = "year";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show every event of a Badí year")
            .arg(
                arg!(badi_year: <BADI_YEAR> "Badí year, 1 began in March 1844")
                    .value_parser(
                        value_parser!(i64).range(i64::from(MIN_BADI_YEAR)..=i64::from(MAX_BADI_YEAR)),
                    ),
            )
            .arg(CommonArgs::lang())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let badi_year = match matches.get_one::<i64>("badi_year") {
            Some(year) => i32::try_from(*year)?,
            None => unreachable!("badi_year is required"),
        };
        Ok(Self {
            badi_year,
            lang: CommonArgs::get_lang(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        })
    }

    pub async fn run(self, badical: &Badical) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing a Badí year...");
        let language = match self.lang.as_deref() {
            Some(code) => Language::from_code_lossy(code),
            None => badical.config().default_language,
        };
        let year = badical.badi_year(self.badi_year, language)?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&year)?),
            ArgOutputFormat::Table => {
                let kind = if year.leap { "leap" } else { "common" };
                println!(
                    "{} {} B.E. ({kind}): Naw-Rúz {}, {} days of Ayyám-i-Há",
                    "Year".bold(),
                    year.year,
                    year.naw_ruz,
                    year.ayyam_i_ha_len,
                );
                print!(
                    "{}",
                    EventFormatter::new()
                        .verbose(self.verbose)
                        .format(&year.events)
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        let cmd = Command::new("test").subcommand(CmdYear::command());
        let matches = cmd.try_get_matches_from(["test", "year", "181"]).unwrap();
        let sub_matches = matches.subcommand_matches(CmdYear::NAME).unwrap();

        let parsed = CmdYear::from(sub_matches).unwrap();
        assert_eq!(parsed.badi_year, 181);
        assert_eq!(parsed.lang, None);
    }

    #[test]
    fn test_reject_years_outside_range() {
        for year in ["0", "501"] {
            let cmd = Command::new("test").subcommand(CmdYear::command());
            assert!(
                cmd.try_get_matches_from(["test", "year", year]).is_err(),
                "{year}"
            );
        }
    }
}
