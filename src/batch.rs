/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Batch analysis of a directory of datasets.

use crate::algo::{analyze, Analysis};
use crate::io::{Dataset, Report, SummaryRow, SummaryWriter};
use crate::utils::StageMetrics;
use anyhow::{bail, Context, Result};
use clap::Args;
use dsi_progress_logger::prelude::*;
use rayon::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The name of the run-statistics file in the results directory.
pub const SUMMARY_FILE_NAME: &str = "metrics_summary.csv";

/// Configuration of a batch run.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory containing the JSON datasets.
    #[arg(default_value = "data")]
    pub data_dir: PathBuf,
    /// Directory receiving per-dataset results and the run statistics.
    #[arg(long, default_value = "results")]
    pub results: PathBuf,
    /// Analyze datasets in parallel; results are still written in name order.
    #[arg(long)]
    pub parallel: bool,
}

/// Returns the `.json` files of a directory, sorted by name.
pub fn list_datasets(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut datasets = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("Cannot list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            datasets.push(path);
        }
    }
    datasets.sort();
    Ok(datasets)
}

/// Reads a dataset and analyzes it.
pub fn process_dataset(path: impl AsRef<Path>, pl: &mut impl ProgressLog) -> Result<Analysis> {
    let path = path.as_ref();
    let dataset =
        Dataset::load(path).with_context(|| format!("Cannot load {}", path.display()))?;
    let graph = dataset
        .to_graph()
        .with_context(|| format!("Cannot build the graph of {}", path.display()))?;
    analyze(&graph, dataset.source(), pl)
        .with_context(|| format!("Cannot analyze {}", path.display()))
}

/// The name of the result file of a dataset: its file name with every
/// occurrence of `.json` removed, followed by `_result.json`.
pub fn result_file_name(dataset: &Path) -> String {
    format!("{}_result.json", file_name(dataset).replace(".json", ""))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

struct Emitter {
    results: PathBuf,
    summary: SummaryWriter<File>,
    rows: Vec<SummaryRow>,
}

impl Emitter {
    fn emit(&mut self, dataset: &Path, analysis: &Analysis) -> Result<()> {
        let out_file = self.results.join(result_file_name(dataset));
        let json = Report::new(analysis).to_json()?;
        std::fs::write(&out_file, json)
            .with_context(|| format!("Cannot write {}", out_file.display()))?;

        let row = SummaryRow::new(file_name(dataset), analysis);
        self.summary
            .write(&row)
            .with_context(|| format!("Cannot write {SUMMARY_FILE_NAME}"))?;

        let metrics = &analysis.metrics;
        log::info!("Result -> {}", out_file.display());
        log::info!(
            "Metrics -> {} {} {} {} {}",
            metrics.scc.report(),
            metrics.condensation.report(),
            metrics.top_sort.report(),
            metrics.shortest.report(),
            metrics.longest.report(),
        );
        log::info!(
            "Shortest={:.3}, Critical={:.3}",
            row.shortest_path_length,
            row.critical_path_length
        );
        self.rows.push(row);
        Ok(())
    }
}

/// Analyzes every dataset of [`BatchConfig::data_dir`].
///
/// For each dataset `name.json` the analysis is written to
/// `name_result.json` in [`BatchConfig::results`], and a line is appended to
/// [`SUMMARY_FILE_NAME`]. The rows written are returned in the same order.
///
/// The first dataset that cannot be read or analyzed stops the run.
pub fn run(config: &BatchConfig, pl: &mut impl ProgressLog) -> Result<Vec<SummaryRow>> {
    if !config.data_dir.is_dir() {
        bail!(
            "Data directory {} not found: place your JSON datasets there",
            config.data_dir.display()
        );
    }
    std::fs::create_dir_all(&config.results)
        .with_context(|| format!("Cannot create {}", config.results.display()))?;

    let datasets = list_datasets(&config.data_dir)?;
    let summary_path = config.results.join(SUMMARY_FILE_NAME);
    let summary_file = File::create(&summary_path)
        .with_context(|| format!("Cannot create {}", summary_path.display()))?;

    let mut emitter = Emitter {
        results: config.results.clone(),
        summary: SummaryWriter::new(summary_file)
            .with_context(|| format!("Cannot write {}", summary_path.display()))?,
        rows: Vec::with_capacity(datasets.len()),
    };

    if config.parallel {
        pl.info(format_args!(
            "Analyzing {} datasets in parallel...",
            datasets.len()
        ));
        let analyses = datasets
            .par_iter()
            .map(|path| process_dataset(path, &mut ProgressLogger::default()))
            .collect::<Vec<_>>();
        for (path, analysis) in datasets.iter().zip(analyses) {
            emitter.emit(path, &analysis?)?;
        }
    } else {
        for path in &datasets {
            pl.info(format_args!("Processing: {}", file_name(path)));
            let analysis = process_dataset(path, pl)?;
            emitter.emit(path, &analysis)?;
        }
    }

    pl.info(format_args!(
        "All done. Metrics CSV at: {}",
        summary_path.display()
    ));
    Ok(emitter.rows)
}
