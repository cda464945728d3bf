/*!
 * Command-line interface for TidyFS
 */

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tidyfs::config::{Args, Command, OrganizeConfig, PopulateConfig};
use tidyfs::organizer::Organizer;
use tidyfs::populate::Populator;
use tidyfs::report::{ReportFormat, Reporter, RunReport};

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        let mut command = Args::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let Some(command) = args.command else {
        let _ = Args::command().print_help();
        return ExitCode::from(2);
    };

    // One time-based seed per process invocation
    let rng = StdRng::from_entropy();

    let report = match command {
        Command::Organize {
            workspace,
            subpath,
            assets,
        } => {
            let config = OrganizeConfig::new(&workspace, &subpath, assets.as_deref());

            // Progress is drawn on stderr and disappears when piped
            let progress = ProgressBar::new(0);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} {prefix:.bold} {wide_msg} {pos}/{len}")
                    .unwrap(),
            );
            progress.set_prefix("Organizing");

            let outcome = Organizer::new(config, Arc::new(progress), rng).run();
            match outcome.result {
                Ok(buckets) => RunReport::organized(outcome.log, buckets),
                Err(err) => RunReport::failed(&err),
            }
        }
        Command::Populate {
            workspace,
            dir_name,
            files,
            assets,
        } => {
            let config = PopulateConfig::new(&workspace, &dir_name, files, assets.as_deref());
            let outcome = Populator::new(config, rng).run();
            match outcome.result {
                Ok(summary) => RunReport::populated(outcome.log, summary),
                Err(err) => RunReport::failed(&err),
            }
        }
    };

    // The JSON document is the run's single artifact; stdout carries nothing else
    if let Err(err) = Reporter::new(ReportFormat::Json).print(&report) {
        eprintln!("tidyfs: failed to render report: {}", err);
        return ExitCode::FAILURE;
    }

    if args.summary {
        let _ = Reporter::new(ReportFormat::ConsoleTable).print(&report);
    }

    if report.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
