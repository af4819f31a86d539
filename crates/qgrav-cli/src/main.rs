// ─────────────────────────────────────────────────────────────────────
// QGrav — Command-Line Entry Point
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use qgrav_capture::{record, run_external};
use qgrav_cli::{render_gup_report, Reporter, Section};
use qgrav_core::gup::Gup3d;
use qgrav_types::error::QgravResult;
use qgrav_types::{PhysicalConstants, QgravConfig};

#[derive(Parser, Debug)]
#[command(name = "qgrav", version, about = "Quantum gravity formula reports")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print report sections (all of them when none are named).
    Report {
        #[arg(long = "section", value_enum)]
        sections: Vec<Section>,
    },
    /// Print the 3D GUP analysis.
    Gup {
        #[arg(long)]
        alpha: Option<f64>,
        /// Explicit β; must equal 2α.
        #[arg(long)]
        beta: Option<f64>,
    },
    /// Record the screen while a workload runs.
    Record {
        /// Program and arguments to run; the full report when empty.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_config(path: Option<&str>) -> QgravResult<QgravConfig> {
    match path {
        Some(path) => QgravConfig::from_file(path),
        None => Ok(QgravConfig::default()),
    }
}

fn run(cli: Cli) -> QgravResult<()> {
    let cfg = load_config(cli.config.as_deref())?;
    let k = PhysicalConstants::si2019();
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Report { sections: Vec::new() }) {
        Commands::Report { sections } => {
            let reporter = Reporter::new(&k, &cfg.samples);
            let mut out = stdout.lock();
            if sections.is_empty() {
                reporter.render_all(&mut out)?;
            } else {
                for section in sections {
                    reporter.render(section, &mut out)?;
                }
            }
            out.flush()?;
        }
        Commands::Gup { alpha, beta } => {
            let alpha = alpha.unwrap_or(cfg.samples.gup_alpha);
            let gup = match beta {
                Some(beta) => Gup3d::with_beta(&k, alpha, beta)?,
                None => Gup3d::new(&k, alpha),
            };
            let mut out = stdout.lock();
            render_gup_report(&k, &gup, &mut out)?;
            out.flush()?;
        }
        Commands::Record { command } => {
            let summary = record(&cfg.capture, || match command.split_first() {
                Some((program, args)) => {
                    run_external(program, args, cfg.capture.working_dir.as_deref())
                }
                None => {
                    let mut out = stdout.lock();
                    Reporter::new(&k, &cfg.samples).render_all(&mut out)?;
                    out.flush()?;
                    Ok(())
                }
            })?;
            println!(
                "Recording saved: {} ({:.2} MiB)",
                summary.output.display(),
                summary.size_mib()
            );
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sections_and_global_flags() {
        let cli = Cli::parse_from([
            "qgrav", "-vv", "report", "--section", "hawking", "--section", "stress-energy",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Commands::Report { sections }) => {
                assert_eq!(sections, vec![Section::Hawking, Section::StressEnergy]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_record_trailing_command() {
        let cli = Cli::parse_from(["qgrav", "record", "--", "python", "-u", "demo.py"]);
        match cli.command {
            Some(Commands::Record { command }) => {
                assert_eq!(command, vec!["python", "-u", "demo.py"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_gup_rejects_inconsistent_beta() {
        let cli = Cli::parse_from(["qgrav", "gup", "--alpha", "0.6", "--beta", "1.0"]);
        assert!(run(cli).is_err());
    }

    #[test]
    fn test_missing_config_file_fails() {
        assert!(load_config(Some("/nonexistent/qgrav.json")).is_err());
    }
}
