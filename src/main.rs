// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use autocomplete::{read_terms, Autocomplete};

mod cli;
use cli::commands::{run_count, run_inspect, run_query};
use cli::display::{themed, BOLD, RED};
use cli::{Cli, Commands};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", themed(RED, &[BOLD], "error:"), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Query { file, k, json } => {
            let index = load_index(&file)?;
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_query(&index, k, json, stdin.lock(), io::BufWriter::new(stdout.lock()))
        }
        Commands::Count { file, prefixes } => {
            let index = load_index(&file)?;
            run_count(&index, &prefixes, io::stdout().lock())
        }
        Commands::Inspect { file, top } => {
            let index = load_index(&file)?;
            run_inspect(&index, &file.display().to_string(), top);
            Ok(())
        }
    }
}

fn load_index(path: &Path) -> Result<Autocomplete> {
    let terms = read_terms(path).with_context(|| format!("loading {}", path.display()))?;
    let index: Autocomplete = terms.into_iter().collect();
    log::info!("indexed {} terms", index.len());
    Ok(index)
}
