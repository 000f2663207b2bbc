// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the autocomplete command-line interface.
//!
//! Three subcommands: `query` is the interactive harness (prefixes on stdin,
//! top-k matches on stdout), `count` answers match counts for prefixes given
//! as arguments, and `inspect` summarizes a term file.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "autocomplete",
    about = "Weighted prefix autocomplete over a term list",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read prefixes from stdin and print the heaviest matches for each
    Query {
        /// Term file (count line + "<weight>\t<query>" lines, or .json)
        file: PathBuf,

        /// Maximum number of matches to print per prefix
        k: usize,

        /// Print one JSON object per prefix instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the number of terms matching each prefix
    Count {
        /// Term file
        file: PathBuf,

        /// Prefixes to count
        #[arg(required = true)]
        prefixes: Vec<String>,
    },

    /// Summarize a term file
    Inspect {
        /// Term file
        file: PathBuf,

        /// Number of heaviest terms to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}
