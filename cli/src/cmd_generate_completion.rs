// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io::Write, path::PathBuf};

use clap::{ArgMatches, Command, ValueEnum, ValueHint, arg, value_parser};
use clap_complete::Generator;
use tokio::fs;

use crate::Cli;

/// Print or install the completion script of a shell.
#[derive(Debug, Clone)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
    pub output_dir: Option<PathBuf>,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Generate shell completion for the specified shell")
            .hide(true)
            .arg(
                arg!(shell: <SHELL> "The shell generator to use")
                    .value_parser(value_parser!(Shell)),
            )
            .arg(
                arg!(-o --"output-dir" <DIR> "Write the script into DIR instead of standard output")
                    .long_help(
                        "\
Write the script into DIR instead of standard output, named the way the shell expects, \
such as _badical for zsh or badical.fish for fish.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::DirPath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let shell = match matches.get_one::<Shell>("shell") {
            Some(shell) => *shell,
            None => unreachable!("shell is required"),
        };
        Self {
            shell,
            output_dir: matches.get_one("output-dir").cloned(),
        }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating shell completion...");
        let script = self.shell.script();

        match self.output_dir {
            Some(dir) => {
                let path = dir.join(self.shell.file_name());
                fs::write(&path, &script).await.map_err(|e| {
                    format!("Failed to write completion script {}: {e}", path.display())
                })?;
                tracing::info!(path = %path.display(), "completion script written");
            }
            None => std::io::stdout().lock().write_all(&script)?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    fn generator(self) -> Box<dyn Generator> {
        use clap_complete::Shell as ClapShell;

        match self {
            Shell::Bash => Box::new(ClapShell::Bash),
            Shell::Elvish => Box::new(ClapShell::Elvish),
            Shell::Fish => Box::new(ClapShell::Fish),
            Shell::Nushell => Box::new(clap_complete_nushell::Nushell {}),
            Shell::PowerShell => Box::new(ClapShell::PowerShell),
            Shell::Zsh => Box::new(ClapShell::Zsh),
        }
    }

    /// Completion script for the whole command tree.
    pub fn script(self) -> Vec<u8> {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        cmd.set_bin_name(name);
        cmd.build();

        let mut buf = Vec::new();
        self.generator().generate(&cmd, &mut buf);
        buf
    }

    /// File name the shell loads the script from.
    pub fn file_name(self) -> String {
        self.generator().file_name(Cli::command().get_name())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_script_mentions_subcommands() {
        let script = String::from_utf8(Shell::Bash.script()).unwrap();
        assert!(script.contains("badical"));
        assert!(script.contains("events"));
        assert!(script.contains("ics"));
    }

    #[test]
    fn test_file_names_follow_shell_conventions() {
        assert_eq!(Shell::Bash.file_name(), "badical.bash");
        assert_eq!(Shell::Fish.file_name(), "badical.fish");
        assert_eq!(Shell::Zsh.file_name(), "_badical");
        assert_eq!(Shell::PowerShell.file_name(), "_badical.ps1");
    }

    #[test]
    fn test_parse_shell_and_output_dir() {
        let cmd = Command::new("test").subcommand(CmdGenerateCompletion::command());
        let matches = cmd
            .try_get_matches_from(["test", "generate-completion", "nushell", "-o", "out"])
            .unwrap();
        let sub_matches = matches
            .subcommand_matches(CmdGenerateCompletion::NAME)
            .unwrap();

        let parsed = CmdGenerateCompletion::from(sub_matches);
        assert_eq!(parsed.shell, Shell::Nushell);
        assert_eq!(parsed.output_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_reject_unknown_shell() {
        let cmd = Command::new("test").subcommand(CmdGenerateCompletion::command());
        assert!(
            cmd.try_get_matches_from(["test", "generate-completion", "tcsh"])
                .is_err()
        );
    }

    #[tokio::test]
    async fn test_write_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let cmd = CmdGenerateCompletion {
            shell: Shell::Zsh,
            output_dir: Some(temp_dir.path().to_path_buf()),
        };

        cmd.run().await.unwrap();

        let script = std::fs::read_to_string(temp_dir.path().join("_badical")).unwrap();
        assert!(script.starts_with("#compdef badical"));
    }
}
