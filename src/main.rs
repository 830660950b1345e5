/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Parser;
use condensation_algo::batch::{self, BatchConfig};
use dsi_progress_logger::prelude::*;

/// Computes strongly connected components, condensation, topological order,
/// shortest paths and critical paths for every JSON dataset in a directory.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    config: BatchConfig,
    /// Increase logging verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Log errors only.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    stderrlog::new()
        .verbosity(2 + cli.verbose as usize)
        .quiet(cli.quiet)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let mut main_pl = progress_logger![display_memory = true];
    batch::run(&cli.config, &mut main_pl)?;

    Ok(())
}
