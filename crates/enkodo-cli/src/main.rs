//! The `enkodo` command line generator.
//!
//! Discovers Rust sources under a path, generates `Marshal` / `Unmarshal` impls for every annotated
//! record in parallel, then writes the results in discovery order.

mod cli;
mod config;
mod discover;
mod logs;
mod output;

use std::{
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::Cli,
    config::Settings,
    discover::discover_sources,
    logs::{
        log_error,
        log_generated,
        log_info,
        log_skipped,
    },
    output::{
        render_path,
        OutputMode,
        RenderedUnit,
    },
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            log_error("enkodo", format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let settings = Settings::resolve(cli)?;
    let sources = discover_sources(&settings.root, &settings.suffix)?;
    anyhow::ensure!(
        !sources.is_empty(),
        "no input files found under {}",
        settings.root.display()
    );
    log_info("scanning", format!("{} source files", sources.len()));

    let (units, failures) = if settings.keep_going {
        generate_isolated(&sources, &settings)
    } else {
        (generate_all(&sources, &settings)?, 0)
    };

    let mode = if settings.stdout {
        OutputMode::Stdout
    } else {
        OutputMode::Files {
            suffix: settings.suffix.clone(),
        }
    };
    let mut stdout = std::io::stdout().lock();
    for unit in units.iter() {
        for note in unit.skipped.iter() {
            log_skipped(&unit.source, note);
        }
        if unit.is_empty() {
            continue;
        }

        let artifact = mode.write(unit, &mut stdout)?;
        log_generated(unit, artifact.as_deref());
    }

    if failures > 0 {
        log_error("enkodo", format!("{failures} of {} files failed", sources.len()));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}

/// Generates every unit, stopping at the first failure before anything is written.
fn generate_all(sources: &[PathBuf], settings: &Settings) -> anyhow::Result<Vec<RenderedUnit>> {
    sources
        .par_iter()
        .map(|source| render_path(source, &settings.registry).context("generation aborted"))
        .collect()
}

/// Generates every unit independently, reporting failures and keeping the rest.
fn generate_isolated(sources: &[PathBuf], settings: &Settings) -> (Vec<RenderedUnit>, usize) {
    let results: Vec<_> = sources
        .par_iter()
        .map(|source| render_path(source, &settings.registry))
        .collect();

    let mut units = Vec::with_capacity(results.len());
    let mut failures = 0;
    for result in results {
        match result {
            Ok(unit) => units.push(unit),
            Err(e) => {
                log_error("failed", e);
                failures += 1;
            }
        }
    }

    (units, failures)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const USER: &str = "pub struct User {\n    #[enkodo]\n    pub email: String,\n}\n";
    const BROKEN: &str = "pub struct Broken {\n    #[enkodo(wire = 5)]\n    pub a: u8,\n}\n";

    fn run_in(dir: &TempDir, flags: &[&str]) -> ExitCode {
        let root = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["enkodo", root].iter().chain(flags)).unwrap();
        run(&cli).unwrap()
    }

    #[test]
    fn artifacts_are_written_for_annotated_files_only() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("user.rs"), USER).unwrap();
        std::fs::write(dir.path().join("plain.rs"), "pub struct Plain;").unwrap();

        assert_eq!(run_in(&dir, &[]), ExitCode::SUCCESS);
        assert!(dir.path().join("user_enkodo.rs").is_file());
        assert!(!dir.path().join("plain_enkodo.rs").exists());

        // A second run does not pick up its own artifacts.
        assert_eq!(run_in(&dir, &[]), ExitCode::SUCCESS);
        assert!(!dir.path().join("user_enkodo_enkodo.rs").exists());
    }

    #[test]
    fn every_annotated_file_gets_its_own_artifact() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("models");
        std::fs::create_dir(&nested).unwrap();
        std::fs::write(dir.path().join("user.rs"), USER).unwrap();
        std::fs::write(nested.join("post.rs"), USER.replace("User", "Post")).unwrap();
        std::fs::write(
            nested.join("partial.rs"),
            "pub struct Partial {\n    #[enkodo]\n    pub kept: u8,\n    #[enkodo]\n    pub owner: Owner,\n}\n",
        )
        .unwrap();

        assert_eq!(run_in(&dir, &[]), ExitCode::SUCCESS);
        assert!(dir.path().join("user_enkodo.rs").is_file());
        assert!(nested.join("post_enkodo.rs").is_file());

        let partial = std::fs::read_to_string(nested.join("partial_enkodo.rs")).unwrap();
        assert!(partial.contains("kept"));
        assert!(!partial.contains("owner"));
    }

    #[test]
    fn one_failure_aborts_the_batch_by_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.rs"), BROKEN).unwrap();
        std::fs::write(dir.path().join("user.rs"), USER).unwrap();

        let root = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["enkodo", root]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("broken.rs:2:"));
        assert!(!dir.path().join("user_enkodo.rs").exists());
    }

    #[test]
    fn keep_going_writes_the_rest_and_still_fails() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.rs"), BROKEN).unwrap();
        std::fs::write(dir.path().join("user.rs"), USER).unwrap();

        assert_eq!(run_in(&dir, &["--keep-going"]), ExitCode::FAILURE);
        assert!(dir.path().join("user_enkodo.rs").is_file());
    }

    #[test]
    fn stdout_mode_writes_no_artifacts() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("user.rs"), USER).unwrap();

        assert_eq!(run_in(&dir, &["-"]), ExitCode::SUCCESS);
        assert!(!dir.path().join("user_enkodo.rs").exists());
    }

    #[test]
    fn an_empty_tree_is_an_error() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["enkodo", root]).unwrap();

        assert!(run(&cli).is_err());
    }
}
