// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prints the demonstration value from the bundled YAML resource.
//!
//! ```bash
//! $ monorepo
//! YAML content: 10
//! ```

use clap::Parser;
use monorepo::adapters::{DataDirectory, EmbeddedResources, YamlParser};
use monorepo::domain::{ConfigValue, Result};
use monorepo::ports::ResourceProvider;
use monorepo::service::{ConfigLoader, DemoValueAccessor};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

/// Print the `demo` value of the bundled `demo.yaml`.
#[derive(Debug, Parser)]
#[command(name = "monorepo", version, about)]
struct Cli {
    /// Read resources from DIR instead of the bundled data directory
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log loader activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: &Cli) -> Result<ConfigValue> {
    let provider: Box<dyn ResourceProvider> = match &cli.data_dir {
        Some(dir) => {
            tracing::debug!("Using data directory {}", dir.display());
            Box::new(DataDirectory::new(dir))
        }
        None => Box::new(EmbeddedResources::bundled()),
    };

    let loader = ConfigLoader::new(provider, YamlParser::new());
    DemoValueAccessor::new(loader).get_demo_value()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout carries only the result line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(&cli) {
        Ok(value) => {
            println!("YAML content: {}", value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("{:?}", e);
            eprintln!("error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
