//! advent - command-line runner for the registered puzzle solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Import advent-solutions to link the solver plugins
use advent_solutions as _;

use advent_solver::{Event, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::{Executor, Filters};
use inputs::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        if let CliError::Executor(error) = &e {
            let errors = error.errors();
            if errors.len() > 1 {
                for error in &errors {
                    eprintln!("  - {}", error);
                }
            }
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    let registry = build_registry(&config.tags, config.event_filter)?;
    let executor = Executor::new(
        registry,
        InputStore::new(config.input_dir.clone()),
        Filters::from(&config),
    )
    .keep_going(config.keep_going);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Every input must be present before anything runs
    let missing = executor.missing_inputs(&work_items);
    if !missing.is_empty() {
        eprintln!("Missing {} input file(s):", missing.len());
        for work in &missing {
            eprintln!("  - {}", executor.inputs().path(work.puzzle).display());
        }
        return Err(CliError::MissingInputs(missing.len()));
    }

    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let mut results = Vec::new();
    let outcome = executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);
    outcome.map_err(CliError::Executor)
}

/// Build registry with tag and event filtering
fn build_registry(
    tags: &[String],
    event: Option<Event>,
) -> Result<advent_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() && event.is_none() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            event.is_none_or(|e| plugin.puzzle.event == e)
                && tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
