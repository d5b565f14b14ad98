// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io::Write, path::PathBuf};

use badical_core::{Badical, IcsKind};
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use tokio::fs;

use crate::arg::CommonArgs;

#[derive(Debug, Clone)]
pub struct CmdIcs {
    pub kind: IcsKind,
    pub year: i64,
    pub lang: Option<String>,
    pub output: Option<PathBuf>,
}

impl CmdIcs {
    pub const NAME: &str = "ics";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Export a Gregorian year as an iCalendar file")
            .arg(
                arg!(kind: <KIND> "Which entries to export")
                    .value_parser(value_parser!(IcsKind)),
            )
            .arg(CommonArgs::year())
            .arg(CommonArgs::lang())
            .arg(
                arg!(-o --output <FILE> "Write to a file instead of standard output")
                    .long_help(
                        "\
Write to a file instead of standard output. If FILE is a directory, the calendar is written \
there under its default name, such as bahai_events_2024.ics.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::AnyPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let kind = match matches.get_one::<IcsKind>("kind") {
            Some(kind) => *kind,
            None => unreachable!("kind is required"),
        };
        Self {
            kind,
            year: CommonArgs::get_year(matches),
            lang: CommonArgs::get_lang(matches),
            output: matches.get_one("output").cloned(),
        }
    }

    pub async fn run(self, badical: &Badical) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "exporting calendar...");
        let query = badical.query(self.year, self.lang.as_deref())?;
        let bytes = badical.ics(self.kind, &query)?;

        match self.output {
            Some(path) => {
                let path = if fs::metadata(&path).await.is_ok_and(|a| a.is_dir()) {
                    path.join(self.kind.file_name(query.year()))
                } else {
                    path
                };
                fs::write(&path, &bytes)
                    .await
                    .map_err(|e| format!("Failed to write calendar file {}: {e}", path.display()))?;
                tracing::info!(path = %path.display(), bytes = bytes.len(), "calendar written");
            }
            None => std::io::stdout().lock().write_all(&bytes)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use badical_core::Config;
    use tempfile::TempDir;

    use super::*;

    async fn badical() -> Badical {
        Badical::new(Config::default()).await.unwrap()
    }

    #[test]
    fn test_parse_ics() {
        let cmd = Command::new("test").subcommand(CmdIcs::command());
        let matches = cmd
            .try_get_matches_from(["test", "ics", "months", "2024", "-l", "en", "-o", "a.ics"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdIcs::NAME).unwrap();

        let parsed = CmdIcs::from(sub_matches);
        assert_eq!(parsed.kind, IcsKind::Months);
        assert_eq!(parsed.year, 2024);
        assert_eq!(parsed.lang.as_deref(), Some("en"));
        assert_eq!(parsed.output, Some(PathBuf::from("a.ics")));
    }

    #[test]
    fn test_reject_unknown_kind() {
        let cmd = Command::new("test").subcommand(CmdIcs::command());
        assert!(
            cmd.try_get_matches_from(["test", "ics", "feasts", "2024"])
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("holy-days.ics");
        let cmd = CmdIcs {
            kind: IcsKind::Events,
            year: 2024,
            lang: Some("en".to_string()),
            output: Some(path.clone()),
        };

        cmd.run(&badical().await).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(text.contains("SUMMARY:Naw-Rúz\r\n"));
    }

    #[tokio::test]
    async fn test_write_to_directory() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = CmdIcs {
            kind: IcsKind::Complete,
            year: 2024,
            lang: None,
            output: Some(temp_dir.path().to_path_buf()),
        };

        cmd.run(&badical().await).await.unwrap();

        let path = temp_dir.path().join("Bahai Calendar 2024-2025.ics");
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("PRODID:-//Bahá'í Calendar//ES\r\n"));
    }
}
