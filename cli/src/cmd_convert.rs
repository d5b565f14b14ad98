// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, str::FromStr};

use badical_core::{BadiDate, Badical};
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::{Timestamp, civil::Date};

use crate::arg::{ArgOutputFormat, CommonArgs};

/// What to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertInput {
    /// The Badí day in progress right now
    Now,
    /// An instant; the Badí day changes at sunset
    Instant(Timestamp),
    /// A Gregorian day, read as its daylight hours
    Gregorian(Date),
    /// A Badí date, converted to its Gregorian day
    Badi(BadiDate),
}

impl FromStr for ConvertInput {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("now") {
            Ok(Self::Now)
        } else if let Ok(instant) = s.parse() {
            Ok(Self::Instant(instant))
        } else if let Ok(date) = s.parse() {
            Ok(Self::Gregorian(date))
        } else if let Ok(badi) = s.parse() {
            Ok(Self::Badi(badi))
        } else {
            Err(format!(
                "Invalid date '{s}'. Expected YYYY-MM-DD, an RFC 3339 timestamp, or a Badí date \
                 YEAR-MONTH-DAY with month 0 for Ayyám-i-Há"
            ))
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdConvert {
    pub input: ConvertInput,
    pub output_format: ArgOutputFormat,
}

impl CmdConvert {
    pub const NAME: &str = "convert";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Convert between Gregorian and Badí dates")
            .arg(
                arg!(date: [DATE] "Gregorian date, timestamp or Badí date; defaults to now")
                    .long_help(
                        "\
Gregorian date (2024-03-20), RFC 3339 timestamp (2024-03-19T16:00:00Z) or Badí date (181-01-01, \
month 0 for Ayyám-i-Há). Timestamps respect the sunset day boundary in Tehran. Defaults to now.",
                    )
                    .value_parser(ConvertInput::from_str),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            input: matches
                .get_one::<ConvertInput>("date")
                .copied()
                .unwrap_or(ConvertInput::Now),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, badical: &Badical) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "converting date...");
        let conversion = self.convert(badical)?;

        match self.output_format {
            ArgOutputFormat::Json => println!("{}", serde_json::to_string_pretty(&conversion)?),
            ArgOutputFormat::Table => println!(
                "{} {} {} {} {} ({})",
                conversion.gregorian,
                "→".dimmed(),
                conversion.badi.day(),
                conversion.badi.month().transliteration(),
                conversion.badi.year(),
                conversion.badi,
            ),
        }
        Ok(())
    }

    fn convert(&self, badical: &Badical) -> Result<Conversion, Box<dyn Error>> {
        let (gregorian, badi) = match self.input {
            ConvertInput::Now => {
                let badi = badical.to_badi_at(Timestamp::now())?;
                (badical.to_gregorian(badi)?.date(), badi)
            }
            ConvertInput::Instant(instant) => {
                let badi = badical.to_badi_at(instant)?;
                (badical.to_gregorian(badi)?.date(), badi)
            }
            ConvertInput::Gregorian(date) => (date, badical.to_badi(date)?),
            ConvertInput::Badi(badi) => (badical.to_gregorian(badi)?.date(), badi),
        };
        Ok(Conversion { gregorian, badi })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
struct Conversion {
    gregorian: Date,
    badi: BadiDate,
}

#[cfg(test)]
mod tests {
    use badical_core::{BadiMonth, Config};
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_parse_input() {
        assert_eq!("now".parse::<ConvertInput>(), Ok(ConvertInput::Now));
        assert_eq!(
            "2024-03-20".parse::<ConvertInput>(),
            Ok(ConvertInput::Gregorian(date(2024, 3, 20)))
        );
        assert_eq!(
            "181-00-03".parse::<ConvertInput>(),
            Ok(ConvertInput::Badi(
                BadiDate::new(181, BadiMonth::AyyamIHa, 3).unwrap()
            ))
        );
        assert!(matches!(
            "2024-03-19T16:00:00Z".parse::<ConvertInput>(),
            Ok(ConvertInput::Instant(_))
        ));
        assert!("yesterday".parse::<ConvertInput>().is_err());
    }

    #[tokio::test]
    async fn test_convert() {
        let badical = Badical::new(Config::default()).await.unwrap();
        let convert = |input: &str| {
            let cmd = CmdConvert {
                input: input.parse().unwrap(),
                output_format: ArgOutputFormat::Json,
            };
            cmd.convert(&badical).unwrap()
        };

        let naw_ruz = BadiDate::new(181, BadiMonth::Baha, 1).unwrap();
        assert_eq!(convert("2024-03-20").badi, naw_ruz);
        assert_eq!(convert("181-01-01").gregorian, date(2024, 3, 20));
        assert_eq!(convert("2024-03-19T16:00:00Z").badi, naw_ruz);
        assert_eq!(convert("2024-03-19T16:00:00Z").gregorian, date(2024, 3, 20));
    }

    #[test]
    fn test_parse_command() {
        let cmd = Command::new("test").subcommand(CmdConvert::command());
        let matches = cmd.try_get_matches_from(["test", "convert"]).unwrap();
        let sub_matches = matches.subcommand_matches(CmdConvert::NAME).unwrap();
        assert_eq!(CmdConvert::from(sub_matches).input, ConvertInput::Now);
    }
}
