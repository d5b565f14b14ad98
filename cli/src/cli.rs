// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use badical_core::{APP_NAME, Badical};
use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cmd_complete::CmdComplete;
use crate::cmd_convert::CmdConvert;
use crate::cmd_events::CmdEvents;
use crate::cmd_fast::CmdFast;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_ics::CmdIcs;
use crate::cmd_months::CmdMonths;
use crate::cmd_year::CmdYear;
use crate::config::parse_config;

/// Run the badical command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let result = match Cli::parse() {
        Ok(cli) => cli.run().await,
        Err(e) => Err(e),
    };
    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to standard error so that JSON and calendar output stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Badí calendar: holy days, feasts, the Fast and iCalendar export.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $BADICAL_CONFIG if set, otherwise \
$XDG_CONFIG_HOME/badical/config.toml on Linux and MacOS, %LOCALAPPDATA%/badical/config.toml on \
Windows. Built-in defaults apply when no file exists.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdEvents::command())
            .subcommand(CmdMonths::command())
            .subcommand(CmdComplete::command())
            .subcommand(CmdFast::command())
            .subcommand(CmdIcs::command())
            .subcommand(CmdConvert::command())
            .subcommand(CmdYear::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdEvents::NAME, matches)) => Events(CmdEvents::from(matches)),
            Some((CmdMonths::NAME, matches)) => Months(CmdMonths::from(matches)),
            Some((CmdComplete::NAME, matches)) => Complete(CmdComplete::from(matches)),
            Some((CmdFast::NAME, matches)) => Fast(CmdFast::from(matches)),
            Some((CmdIcs::NAME, matches)) => Ics(CmdIcs::from(matches)),
            Some((CmdConvert::NAME, matches)) => Convert(CmdConvert::from(matches)),
            Some((CmdYear::NAME, matches)) => Year(CmdYear::from(matches)?),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// List the events of a Gregorian year
    Events(CmdEvents),

    /// List the month starts of a Gregorian year
    Months(CmdMonths),

    /// Show events, month starts and the Fast together
    Complete(CmdComplete),

    /// Show the Fast of a Gregorian year
    Fast(CmdFast),

    /// Export an iCalendar file
    Ics(CmdIcs),

    /// Convert a date
    Convert(CmdConvert),

    /// Show a Badí year
    Year(CmdYear),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Events(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Months(a)   => Self::run_with(config, |x| a.run(x).boxed()).await,
            Complete(a) => Self::run_with(config, |x| a.run(x).boxed()).await,
            Fast(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            Ics(a)      => Self::run_with(config, |x| a.run(x).boxed()).await,
            Convert(a)  => Self::run_with(config, |x| a.run(x).boxed()).await,
            Year(a)     => Self::run_with(config, |x| a.run(x).boxed()).await,
            GenerateCompletion(a) => a.run().await,
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a Badical) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let config = parse_config(config).await?;
        let badical = Badical::new(config).await?;

        f(&badical).await
    }
}
