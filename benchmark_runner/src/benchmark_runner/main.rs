//!
//! The benchmark runner binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;
use self::arguments::Selection;

///
/// The application entry point.
///
fn main() {
    let exit_code = match main_inner(Arguments::parse()) {
        Ok(()) => benchmark_runner::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {error:?}", "Error:".bright_red().bold());
            benchmark_runner::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    if !arguments.executable.exists() {
        anyhow::bail!(
            "Executable {:?} not found. Build the aligner first:\n    g++ -std=c++17 -O3 -Wall -Wextra src/MSAligner.cpp src/alignment.cpp src/io.cpp -o alineador",
            arguments.executable
        );
    }
    let selection = arguments.selection()?;

    let layout = benchmark_runner::Layout::new(arguments.benchmark_root.clone());
    let results_directory = layout.create_results_directory()?;
    let locator = benchmark_runner::DatasetLocator::new(layout.clone());

    let datasets: Vec<PathBuf> = match selection {
        Selection::Synthetic(sizes) => {
            println!("    {} synthetic datasets", "Creating".bright_green().bold());
            for size in sizes.into_iter() {
                println!(
                    "             dataset with {size} sequences: {}",
                    "not implemented".yellow()
                );
            }
            return Ok(());
        }
        Selection::Scalability => {
            scalability(&locator)?;
            return Ok(());
        }
        Selection::Dataset(path) => {
            if !path.exists() {
                anyhow::bail!("Dataset {path:?} not found");
            }
            vec![path]
        }
        Selection::Category(category) => locator.find(Some(category))?,
        Selection::All => locator.find(None)?,
    };
    if datasets.is_empty() {
        anyhow::bail!("No datasets found to run");
    }

    if !arguments.quiet {
        println!(
            "    {} {} on {} datasets",
            "Starting".bright_green().bold(),
            arguments.executable.display(),
            datasets.len(),
        );
        for dataset in datasets.iter() {
            println!("             {}", dataset.display());
        }
    }

    let executor = benchmark_runner::Executor::new(
        arguments.executable,
        Duration::from_secs(arguments.timeout),
        layout.extension.clone(),
    );
    let batch = benchmark_runner::Batch::new(
        executor,
        results_directory,
        arguments.verbose,
        arguments.quiet,
    );

    let run_time_start = Instant::now();
    let batch_result = batch.run(datasets.as_slice(), arguments.output)?;
    let report_paths = benchmark_runner::Report::generate(&batch_result)?;

    if !arguments.quiet {
        print!("{batch_result}");
        println!("     {} {}", "Summary".bright_green().bold(), report_paths.text.display());
        println!("         {} {}", "CSV".bright_green().bold(), report_paths.csv.display());
        println!("        {} {}", "JSON".bright_green().bold(), report_paths.json.display());
        println!(
            "    {} running benchmarks in {}m{:02}s, results in {}",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
            batch_result.output_directory().display(),
        );
    }

    Ok(())
}

///
/// Reports the scalability test, which is not implemented yet.
///
/// Returns the base dataset the test would start from, if any. A missing base
/// dataset is reported but is not an error.
///
fn scalability(locator: &benchmark_runner::DatasetLocator) -> anyhow::Result<Option<PathBuf>> {
    let base = locator
        .find(Some(benchmark_runner::Category::Small))?
        .into_iter()
        .next();
    match base {
        Some(ref base) => println!(
            "    {} scalability test with {}: {}",
            "Skipping".yellow().bold(),
            base.display(),
            "not implemented".yellow()
        ),
        None => println!(
            "    {} scalability test: no datasets found",
            "Skipping".yellow().bold(),
        ),
    }
    Ok(base)
}
