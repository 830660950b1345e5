/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use condensation_algo::batch::{self, BatchConfig, SUMMARY_FILE_NAME};
use dsi_progress_logger::prelude::*;
use std::fs;
use std::path::Path;

const CHAIN: &str = r#"{"n": 3, "directed": true, "source": 0,
    "edges": [{"u": 0, "v": 1, "w": 2}, {"u": 1, "v": 2, "w": 3}, {"u": 0, "v": 2, "w": 10}]}"#;
const CYCLE: &str = r#"{"directed": true, "edges": [{"u": 0, "v": 1}, {"u": 1, "v": 0}]}"#;
const UNDIRECTED: &str = r#"{"edges": [{"u": 0, "v": 1, "w": 5}], "comment": "ignored"}"#;

fn populate(data_dir: &Path) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    fs::write(data_dir.join("chain.json"), CHAIN)?;
    fs::write(data_dir.join("cycle.json"), CYCLE)?;
    fs::write(data_dir.join("undirected.json"), UNDIRECTED)?;
    fs::write(data_dir.join("notes.txt"), "not a dataset")?;
    Ok(())
}

fn config(root: &Path, parallel: bool) -> BatchConfig {
    BatchConfig {
        data_dir: root.join("data"),
        results: root.join("results"),
        parallel,
    }
}

#[test]
fn test_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config(dir.path(), false);
    populate(&config.data_dir)?;

    let rows = batch::run(&config, no_logging![])?;
    let names = rows.iter().map(|row| row.dataset.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["chain.json", "cycle.json", "undirected.json"]);

    for stem in ["chain", "cycle", "undirected"] {
        assert!(config.results.join(format!("{stem}_result.json")).is_file());
    }
    assert!(!config.results.join("notes_result.json").exists());

    let result: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(config.results.join("chain_result.json"))?)?;
    assert_eq!(result["SCC"], serde_json::json!([[2], [1], [0]]));
    assert_eq!(result["TopologicalOrder"], serde_json::json!([2, 1, 0]));
    assert_eq!(result["CriticalPath"]["length"], serde_json::json!(10.0));

    let summary = fs::read_to_string(config.results.join(SUMMARY_FILE_NAME))?;
    let lines = summary.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("dataset,n_components,n_nodes,scc_time_ms"));
    assert!(lines[1].starts_with("chain.json,3,3,"));
    assert!(lines[2].starts_with("cycle.json,1,2,"));
    assert!(lines[3].starts_with("undirected.json,1,2,"));
    assert!(lines[1].ends_with(",0.000,10.000"));
    Ok(())
}

#[test]
fn test_parallel_matches_sequential() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let sequential = config(dir.path(), false);
    populate(&sequential.data_dir)?;
    let parallel = BatchConfig {
        results: dir.path().join("parallel_results"),
        ..config(dir.path(), true)
    };

    let seq_rows = batch::run(&sequential, no_logging![])?;
    let par_rows = batch::run(&parallel, no_logging![])?;
    assert_eq!(seq_rows.len(), par_rows.len());
    for (s, p) in seq_rows.iter().zip(&par_rows) {
        assert_eq!(s.dataset, p.dataset);
        assert_eq!(s.n_components, p.n_components);
        assert_eq!(s.dfs_visits, p.dfs_visits);
        assert_eq!(s.dags_relaxations, p.dags_relaxations);
        assert_eq!(s.critical_path_length, p.critical_path_length);
    }

    for stem in ["chain", "cycle", "undirected"] {
        let name = format!("{stem}_result.json");
        assert_eq!(
            fs::read_to_string(sequential.results.join(&name))?,
            fs::read_to_string(parallel.results.join(&name))?
        );
    }
    Ok(())
}

#[test]
fn test_missing_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path(), false);
    assert!(batch::run(&config, no_logging![]).is_err());
    assert!(!config.results.exists());
}

#[test]
fn test_invalid_dataset_stops_the_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config(dir.path(), false);
    populate(&config.data_dir)?;
    fs::write(
        config.data_dir.join("bad.json"),
        r#"{"edges": [{"u": 0, "v": 1, "w": -1}]}"#,
    )?;

    let err = batch::run(&config, no_logging![]).unwrap_err();
    assert!(err.to_string().contains("bad.json"));
    Ok(())
}

#[test]
fn test_huge_node_id_stops_the_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config(dir.path(), false);
    populate(&config.data_dir)?;
    fs::write(
        config.data_dir.join("huge.json"),
        r#"{"directed": true, "edges": [{"u": 18446744073709551615, "v": 0}]}"#,
    )?;

    let err = batch::run(&config, no_logging![]).unwrap_err();
    assert!(err.to_string().contains("huge.json"));
    Ok(())
}

#[test]
fn test_empty_data_dir() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config(dir.path(), false);
    fs::create_dir_all(&config.data_dir)?;

    let rows = batch::run(&config, no_logging![])?;
    assert!(rows.is_empty());
    let summary = fs::read_to_string(config.results.join(SUMMARY_FILE_NAME))?;
    assert_eq!(summary.lines().count(), 1);
    assert!(summary.ends_with("critical_path_length\n"));
    Ok(())
}
