//! `mesh-fixtures` command line entry point.
//!
//! ```text
//! mesh-fixtures [--output-dir DIR] [--sizes N,N,...] [--formats stl,obj,vtp]
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{GeneratorConfig, DEFAULT_OUTPUT_DIR, DEFAULT_TARGET_SIZES};
use log::{error, info, log_enabled, Level};
use mesh_export::MeshFormat;
use mesh_fixtures::generate_all;

/// Generate sphere mesh fixtures for loader and renderer benchmarks.
#[derive(Parser, Debug)]
#[command(name = "mesh-fixtures", version, about, long_about = None)]
struct Cli {
    /// Directory the fixtures are written to.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Target vertex counts, comma separated.
    #[arg(long, value_name = "N", value_delimiter = ',')]
    sizes: Vec<usize>,

    /// Formats to write, comma separated (stl, obj, vtp).
    #[arg(long, value_name = "FORMAT", value_delimiter = ',')]
    formats: Vec<MeshFormat>,

    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, io::stderr());
            ExitCode::FAILURE
        }
    }
}

impl Cli {
    /// Resolves the options into a run configuration. Empty lists fall back
    /// to the default sizes and to every format.
    fn into_config(self) -> Result<(GeneratorConfig, Vec<MeshFormat>)> {
        let sizes = if self.sizes.is_empty() {
            DEFAULT_TARGET_SIZES.to_vec()
        } else {
            self.sizes
        };
        let formats = if self.formats.is_empty() {
            MeshFormat::ALL.to_vec()
        } else {
            self.formats
        };

        let config = GeneratorConfig::new(self.output_dir, sizes)
            .context("invalid command line options")?;
        Ok((config, formats))
    }
}

fn run(cli: Cli) -> Result<()> {
    let (config, formats) = cli.into_config()?;
    let reports = generate_all(&config, &formats).context("fixture generation aborted")?;

    let files: Vec<_> = reports.iter().flat_map(|report| &report.files).collect();
    info!("Generation complete! Total files created: {}", files.len());
    for file in files {
        info!("  - {}", file.path.display());
    }

    Ok(())
}

/// Logs a fatal error, or writes it to `out` when error records are
/// filtered out (`RUST_LOG=off`).
fn report_failure<W: Write>(err: &anyhow::Error, mut out: W) {
    if log_enabled!(Level::Error) {
        error!("{err:#}");
    } else {
        // Nothing left to report a failed write to
        let _ = writeln!(out, "error: {err:#}");
    }
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(level)
        .parse_default_env()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::ffi::OsString;
    use std::fs;
    use std::path::Path;

    #[test]
    fn test_defaults_resolve_to_every_size_and_format() {
        let cli = Cli::try_parse_from(["mesh-fixtures"]).unwrap();
        assert!(cli.sizes.is_empty());
        assert!(cli.formats.is_empty());
        assert!(!cli.verbose);

        let (config, formats) = cli.into_config().unwrap();
        assert_eq!(config.output_dir, Path::new(DEFAULT_OUTPUT_DIR));
        assert_eq!(config.target_sizes, DEFAULT_TARGET_SIZES.to_vec());
        assert_eq!(formats, MeshFormat::ALL.to_vec());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let err = Cli::try_parse_from(["mesh-fixtures", "--formats", "stl,ply"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
        assert!(err.to_string().contains("ply"));
    }

    #[test]
    fn test_lists_parse_in_order() {
        let cli = Cli::try_parse_from([
            "mesh-fixtures",
            "--sizes",
            "4,100",
            "--formats",
            "vtp,stl",
            "--output-dir",
            "out",
        ])
        .unwrap();

        let (config, formats) = cli.into_config().unwrap();
        assert_eq!(config.target_sizes, vec![4, 100]);
        assert_eq!(formats, vec![MeshFormat::Vtp, MeshFormat::Stl]);
        assert_eq!(config.output_dir, Path::new("out"));
    }

    #[test]
    fn test_zero_size_is_rejected_before_writing() {
        let cli = Cli::try_parse_from(["mesh-fixtures", "--sizes", "0"]).unwrap();
        assert!(cli.into_config().is_err());
    }

    #[test]
    fn test_blocked_output_dir_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("occupied");
        fs::write(&blocker, b"not a directory").unwrap();
        let output = blocker.join("sub");

        let args: Vec<OsString> = vec![
            "mesh-fixtures".into(),
            "--sizes".into(),
            "4".into(),
            "--output-dir".into(),
            output.clone().into_os_string(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        let err = run(cli).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains(&output.display().to_string()));
    }

    #[test]
    fn test_failure_is_written_without_a_logger() {
        // No logger is installed in tests, so error records are disabled
        let err = anyhow::anyhow!("disk full").context("fixture generation aborted");
        let mut out = Vec::new();
        report_failure(&err, &mut out);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "error: fixture generation aborted: disk full\n"
        );
    }
}
