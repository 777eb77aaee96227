#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use oil_delivery_cli::extensions::check::{check_solution_files, describe_check_result};
use oil_delivery_cli::extensions::solve::config::create_logger;
use oil_delivery_core::checker::{FlagEncoding, encode_exit_code, io_error_exit_code};
use oil_delivery_core::utils::GenericError;
use std::io::BufReader;

const INSTANCE_ARG_NAME: &str = "instance";
const SOLUTION_ARG_NAME: &str = "solution";
const ENCODING_ARG_NAME: &str = "encoding";
const LOG_ARG_NAME: &str = "log";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Checks solution feasibility and prints the packed objective or error mask")
        .arg(
            Arg::new(INSTANCE_ARG_NAME)
                .help("Sets instance file")
                .short('i')
                .long(INSTANCE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Sets solution file")
                .short('s')
                .long(SOLUTION_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(ENCODING_ARG_NAME)
                .help("Specifies how error flags are packed into the exit code")
                .long(ENCODING_ARG_NAME)
                .value_parser(["legacy", "disjoint"])
                .default_value("legacy"),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether checker diagnostics are printed")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

/// Prints the packed code on the first stdout line and exits with it.
pub fn run_check(matches: &ArgMatches) -> Result<(), String> {
    let (code, description) = check_from_args(matches)?;

    println!("{code}");
    eprintln!("{description}");

    process::exit(code);
}

/// Returns the packed code and its description.
fn check_from_args(matches: &ArgMatches) -> Result<(i32, String), String> {
    let encoding = matches
        .get_one::<String>(ENCODING_ARG_NAME)
        .map(|value| FlagEncoding::from_str(value))
        .transpose()?
        .unwrap_or_default();
    let logger = create_logger(matches.get_flag(LOG_ARG_NAME));

    let instance_path = matches.get_one::<String>(INSTANCE_ARG_NAME).ok_or("instance path is not specified")?;
    let solution_path = matches.get_one::<String>(SOLUTION_ARG_NAME).ok_or("solution path is not specified")?;

    let files =
        File::open(instance_path).and_then(|instance| File::open(solution_path).map(|solution| (instance, solution)));

    Ok(match files {
        Ok((instance, solution)) => {
            match check_solution_files(BufReader::new(instance), BufReader::new(solution), &logger) {
                Ok(result) => (encode_exit_code(&result, encoding), describe_check_result(&result)),
                Err(errors) => {
                    (io_error_exit_code(), format!("cannot read instance:\n{}", GenericError::join_many(&errors, "\n")))
                }
            }
        }
        Err(err) => (io_error_exit_code(), format!("cannot open input file: '{err}'")),
    })
}
