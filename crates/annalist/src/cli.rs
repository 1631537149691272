//! CLI definition.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use annalist_config::{Config, ConfigError};
use annalist_core::Pipeline;
use annalist_format::ChangeLogFormatter;
use annalist_git::LogCommand;

/// Convert `git log` output into a GNU-style ChangeLog.
///
/// With no arguments, runs git in the current directory and writes the
/// changelog to standard output, most recent commit first.
#[derive(Debug, Parser)]
#[command(name = "annalist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run git in the given directory instead of the current one
    #[arg(short = 'C', long, value_name = "PATH")]
    pub directory: Option<PathBuf>,

    /// Write the changelog to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read pre-captured log text from standard input instead of running git
    #[arg(long)]
    pub stdin: bool,

    /// Path to TOML configuration file
    #[arg(short = 'f', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Runs the conversion.
    pub fn run(self) -> Result<()> {
        let config = self.load_config()?;
        let formatter = ChangeLogFormatter::new().with_width(config.changelog.width);
        let pipeline = Pipeline::new(formatter);

        let mut output = self.open_output(&config)?;

        let entries = if self.stdin {
            pipeline.convert(io::stdin().lock(), &mut output)?
        } else {
            let mut command = LogCommand::new();
            if let Some(directory) = &self.directory {
                command = command.directory(directory);
            }
            pipeline.convert_log(command, &mut output)?
        };

        output.flush()?;
        tracing::debug!(entries, "changelog written");
        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => annalist_config::load_config(path)
                .with_context(|| format!("failed to load {}", path.display())),
            None => match annalist_config::find_and_load_config() {
                Ok(config) => Ok(config),
                // No config file anywhere is the stock setup.
                Err(ConfigError::NotFound(_)) => Ok(Config::default()),
                Err(err) => Err(err.into()),
            },
        }
    }

    fn open_output(&self, config: &Config) -> Result<Box<dyn Write>> {
        // The flag wins over the config file; "-" selects stdout.
        let target = self.output.clone().or_else(|| {
            (config.changelog.output != "-").then(|| PathBuf::from(&config.changelog.output))
        });

        match target {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout()))),
        }
    }
}
