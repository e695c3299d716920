// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use acirfx_config::{load_config, CliOverrides};
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{info, instrument, Level};

use crate::helpers::telemetry::setup_tracing;
use crate::{check, export, inspect, list, public_witness, witness};

#[derive(Parser, Debug)]
#[command(name = "acirfx")]
#[command(about = "Check, inspect and export ACIR circuit fixtures", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding fixture artifacts. Overrides the config file
    #[arg(long, global = true)]
    fixtures_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `acirfx -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

/// Which fixture a command works on.
#[derive(Args, Debug, Clone, Default)]
pub struct FixtureSource {
    /// Builtin fixture name, or `<name>.json` inside the fixtures dir. Defaults to the
    /// configured fixture
    pub name: Option<String>,

    /// Read a fixture artifact from this file instead
    #[arg(long, conflicts_with = "name")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List builtin fixtures and the artifacts found in the fixtures dir
    List,

    /// Verify that a fixture's bytecode and witness maps are consistent
    Check {
        #[command(flatten)]
        source: FixtureSource,
    },

    /// Print the circuit carried by a fixture
    Inspect {
        #[command(flatten)]
        source: FixtureSource,
    },

    /// Print a fixture's witness map
    Witness {
        #[command(flatten)]
        source: FixtureSource,

        /// Print the expected (solved) map instead of the initial one
        #[arg(long)]
        expected: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the public and return witness of the expected map
    PublicWitness {
        #[command(flatten)]
        source: FixtureSource,
    },

    /// Write a fixture as a JSON artifact
    Export {
        #[command(flatten)]
        source: FixtureSource,

        /// Output file
        #[arg(short, long)]
        out: PathBuf,
    },
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    #[instrument(skip_all)]
    pub async fn execute(self) -> Result<()> {
        setup_tracing(self.log_level());

        let config = load_config(CliOverrides {
            config_file: self.config,
            fixtures_dir: self.fixtures_dir,
            default_fixture: None,
        })?;
        info!("Config loaded from: {:?}", config.config_file);

        match self.command {
            Commands::List => list::execute(&config).await?,
            Commands::Check { source } => check::execute(&source, &config).await?,
            Commands::Inspect { source } => inspect::execute(&source, &config).await?,
            Commands::Witness {
                source,
                expected,
                json,
            } => witness::execute(&source, &config, expected, json).await?,
            Commands::PublicWitness { source } => {
                public_witness::execute(&source, &config).await?
            }
            Commands::Export { source, out } => export::execute(&source, &config, &out).await?,
        }

        Ok(())
    }
}
