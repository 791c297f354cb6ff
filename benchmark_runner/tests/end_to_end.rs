//!
//! The benchmark pipeline end-to-end tests.
//!

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

///
/// Lays out `datasets/small/{good,bad}.fasta` and an aligner script that fails
/// on `bad` inputs.
///
fn setup(root: &Path) -> PathBuf {
    let small = root.join("datasets").join("small");
    std::fs::create_dir_all(&small).expect("Directory creation");
    for name in ["bad.fasta", "good.fasta"] {
        std::fs::write(small.join(name), ">seq1\nATCG\n>seq2\nGCTA\n").expect("Dataset writing");
    }

    let executable = root.join("alineador");
    std::fs::write(
        &executable,
        r#"#!/bin/sh
case "$(basename "$1")" in
  bad.fasta)
    echo "Error: Invalid input" >&2
    exit 1
    ;;
esac
echo "Leyendo archivo de entrada: $1"
echo "Tiempo total: 1.5s"
echo "Longitud final: 8 posiciones"
cp "$1" "$2"
"#,
    )
    .expect("Script writing");
    std::fs::set_permissions(&executable, std::fs::Permissions::from_mode(0o755))
        .expect("Script permissions");
    executable
}

#[test]
fn mixed_batch_reports() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let executable = setup(root.path());
    let layout = benchmark_runner::Layout::new(root.path().to_path_buf());

    let mut datasets = benchmark_runner::DatasetLocator::new(layout.clone())
        .find(Some(benchmark_runner::Category::Small))
        .expect("Always valid");
    assert_eq!(datasets.len(), 2);
    datasets.reverse();
    assert!(datasets[0].ends_with("good.fasta"));

    let executor = benchmark_runner::Executor::new(
        executable,
        Duration::from_secs(30),
        layout.extension.clone(),
    );
    let results_directory = layout.create_results_directory().expect("Always valid");
    let batch = benchmark_runner::Batch::new(executor, results_directory, false, true)
        .run(datasets.as_slice(), None)
        .expect("Always valid");
    let paths = benchmark_runner::Report::generate(&batch).expect("Always valid");

    let text = std::fs::read_to_string(paths.text).expect("Text report");
    assert!(text.contains("Successful: 1\n"));
    assert!(text.contains("Failed: 1\n"));
    assert!(text.contains("FAILED BENCHMARKS:\n--------------------\n  bad.fasta: Error: Invalid input\n"));
    assert!(text.contains("  good.fasta\n    Tiempo total: 1.5s\n\n"));
    assert!(!text.contains("Longitud final"));

    let csv = std::fs::read_to_string(paths.csv).expect("CSV report");
    let rows: Vec<&str> = csv.lines().collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("good.fasta,True,"));
    assert!(rows[2].starts_with("bad.fasta,False,"));
    assert!(rows[2].ends_with(",,Error: Invalid input"));

    let json: serde_json::Value =
        serde_json::from_str(std::fs::read_to_string(paths.json).expect("JSON report").as_str())
            .expect("Valid JSON");
    let records = json.as_array().expect("Array");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["outcome"], "success");
    assert_eq!(records[1]["error_kind"], "non_zero_exit");
    assert_eq!(
        records[0]["dataset"].as_str().map(PathBuf::from),
        Some(datasets[0].clone())
    );

    let output = records[0]["output"].as_str().map(PathBuf::from).expect("Output path");
    assert!(output.starts_with(batch.output_directory()));
    assert!(output.is_file());
}

#[test]
fn empty_selection_is_empty() {
    let root = tempfile::tempdir().expect("Temporary directory");
    let locator =
        benchmark_runner::DatasetLocator::new(benchmark_runner::Layout::new(root.path().to_path_buf()));

    assert!(locator.find(None).expect("Always valid").is_empty());
    assert!(locator
        .find_in("nonexistent_category")
        .expect("Always valid")
        .is_empty());
}
