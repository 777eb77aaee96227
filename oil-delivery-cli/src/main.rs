//! A command line interface to the *oil delivery* solver and checker.
//!

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

mod commands;

use self::commands::check::{get_check_app, run_check};
use self::commands::generate::{get_generate_app, run_generate};
use self::commands::solve::{get_solve_app, run_solve};
use clap::Command;
use std::process;

fn get_app() -> Command {
    Command::new("Oil Delivery Solver")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to the multi-period oil delivery solver and checker")
        .subcommand(get_solve_app())
        .subcommand(get_check_app())
        .subcommand(get_generate_app())
}

fn main() {
    let matches = get_app().get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches),
        Some(("check", check_matches)) => run_check(check_matches),
        Some(("generate", generate_matches)) => run_generate(generate_matches),
        _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
