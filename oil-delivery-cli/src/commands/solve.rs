#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use oil_delivery_cli::extensions::check::describe_check_result;
use oil_delivery_cli::extensions::solve::audit::{AuditRecord, append_audit_record};
use oil_delivery_cli::extensions::solve::config::*;
use oil_delivery_cli::extensions::solve::external::run_external_checker;
use oil_delivery_cli::extensions::solve::interruption::create_interruption_quota;
use oil_delivery_core::checker::{CheckerOutcome, FlagEncoding};
use oil_delivery_core::format::{Submission, deserialize_instance, serialize_solution};
use oil_delivery_core::solver::{SearchResult, verify};
use oil_delivery_core::utils::*;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

const INSTANCE_ARG_NAME: &str = "instance";
const SOLUTION_ARG_NAME: &str = "solution";
const SEED_ARG_NAME: &str = "seed";
const TIMEOUT_ARG_NAME: &str = "timeout";
const MAX_ITERATIONS_ARG_NAME: &str = "max-iterations";
const JOBS_ARG_NAME: &str = "jobs";
const RUN_ID_ARG_NAME: &str = "run-id";
const ENVIRONMENT_ARG_NAME: &str = "environment";
const CONFIG_ARG_NAME: &str = "config";
const LOG_PATH_ARG_NAME: &str = "log-path";
const LOG_ARG_NAME: &str = "log";
const CHECK_ARG_NAME: &str = "check";
const CHECKER_ARG_NAME: &str = "checker";
const AUTHOR_ARG_NAME: &str = "author";

const DEFAULT_AUTHOR: &str = "anonymous";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Solves the multi-period oil delivery problem")
        .arg(Arg::new(INSTANCE_ARG_NAME).help("Sets the instance file to use").short('i').long(INSTANCE_ARG_NAME))
        .arg(
            Arg::new(SOLUTION_ARG_NAME)
                .help("Specifies path to the file for solution output")
                .short('o')
                .long(SOLUTION_ARG_NAME),
        )
        .arg(Arg::new(SEED_ARG_NAME).help("Specifies random seed").long(SEED_ARG_NAME))
        .arg(
            Arg::new(TIMEOUT_ARG_NAME)
                .help("Specifies time budget in seconds, a reserve for saving the solution is subtracted")
                .short('t')
                .long(TIMEOUT_ARG_NAME),
        )
        .arg(
            Arg::new(MAX_ITERATIONS_ARG_NAME)
                .help("Specifies max amount of attempts per worker")
                .short('n')
                .long(MAX_ITERATIONS_ARG_NAME),
        )
        .arg(
            Arg::new(JOBS_ARG_NAME)
                .help("Specifies amount of parallel jobs, non-positive values mean all cpus")
                .short('j')
                .long(JOBS_ARG_NAME)
                .allow_negative_numbers(true),
        )
        .arg(Arg::new(RUN_ID_ARG_NAME).help("Specifies run id written to the audit log").long(RUN_ID_ARG_NAME))
        .arg(
            Arg::new(ENVIRONMENT_ARG_NAME)
                .help("Specifies path to the environment file, command line arguments override its values")
                .long(ENVIRONMENT_ARG_NAME),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the algorithm config file")
                .short('c')
                .long(CONFIG_ARG_NAME),
        )
        .arg(Arg::new(LOG_PATH_ARG_NAME).help("Specifies path to the csv audit log").long(LOG_PATH_ARG_NAME))
        .arg(Arg::new(LOG_ARG_NAME).help("Enables logging to stdout").long(LOG_ARG_NAME).action(ArgAction::SetTrue))
        .arg(
            Arg::new(CHECK_ARG_NAME)
                .help("Checks the best solution and fails when it is infeasible")
                .long(CHECK_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CHECKER_ARG_NAME)
                .help("Specifies path to an external checker executable used by the check")
                .long(CHECKER_ARG_NAME),
        )
        .arg(Arg::new(AUTHOR_ARG_NAME).help("Specifies author name written to the solution").long(AUTHOR_ARG_NAME))
}

pub fn run_solve(matches: &ArgMatches) -> Result<(), String> {
    let settings = get_environment_config(matches)?;

    let instance_path = settings.instance_path.clone().ok_or("instance path is not specified")?;
    let solution_path = settings.solution_path.clone().ok_or("solution path is not specified")?;

    let config = settings
        .config_path
        .as_ref()
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .transpose()
        .map_err(|err| err.to_string())?
        .unwrap_or_default();

    let logger = create_logger(matches.get_flag(LOG_ARG_NAME) || is_logging_enabled(&config));

    (logger)(&format!("[input] reading instance from '{instance_path}'"));
    let instance = deserialize_instance(BufReader::new(open_file(&instance_path, "instance")), false)
        .map(Arc::new)
        .map_err(|errors| format!("cannot read instance:\n{}", GenericError::join_many(&errors, "\n")))?;
    (logger)(&format!(
        "[input] {} periods, {} gas stations, {} vehicles",
        instance.period_count,
        instance.stations.len(),
        instance.vehicles.len()
    ));

    let environment = Arc::new(create_environment(&settings, logger.clone()));
    let strategy = create_strategy(&config);
    let solver = create_builder_from_config(instance.clone(), environment.clone(), &config)
        .map(|builder| builder.with_max_iterations(settings.max_iterations))
        .and_then(|builder| builder.build())
        .map_err(|err| format!("cannot build solver: '{err}'"))?;

    let (result, duration) = Timer::measure_duration(|| solver.solve());
    let result = result
        .map_err(|err| format!("cannot solve: '{err}'"))?
        .ok_or_else(|| "no worker succeeded, no solution found".to_string())?;

    (logger)(&format!(
        "[framework] best objective {:.4} by worker {} after {} iterations in {:.3}s",
        result.objective,
        result.worker_idx,
        result.iterations,
        duration.as_secs_f64()
    ));

    let submission = Submission::new(
        matches.get_one::<String>(AUTHOR_ARG_NAME).map(String::as_str).unwrap_or(DEFAULT_AUTHOR),
        strategy.name(),
        instance_path.as_str(),
        duration.as_secs_f64(),
        environment.jobs,
    );
    let mut out_buffer = create_write_buffer(Some(create_file(&solution_path, "solution")));
    serialize_solution(&mut out_buffer, &submission, &result.solution)
        .map_err(|err| format!("cannot write solution: '{err}'"))?;
    drop(out_buffer);

    let check = verify(&instance, &result.solution);

    if let Some(log_path) = settings.log_path.as_ref() {
        let record = AuditRecord {
            run_id: settings.run_id.clone().unwrap_or_default(),
            instance: instance_path.clone(),
            is_feasible: check.is_feasible(),
            objective: result.objective,
            checker_objective: check.feasible_objective().unwrap_or_default(),
            duration: duration.as_secs_f64(),
            seed: settings.rand_seed,
            config: settings.config_path.clone(),
            iterations: result.iterations,
        };
        append_audit_record(Path::new(log_path), &record).map_err(|err| err.to_string())?;
    }

    if matches.get_flag(CHECK_ARG_NAME) {
        let outcome = match matches.get_one::<String>(CHECKER_ARG_NAME) {
            Some(checker) => {
                run_external_checker(Path::new(checker), &instance_path, &solution_path, FlagEncoding::default())
                    .map_err(|err| err.to_string())?
            }
            None if check.is_feasible() => CheckerOutcome::Feasible { objective: check.objective },
            None => CheckerOutcome::Infeasible { flags: check.flags },
        };

        report_check_outcome(&result, outcome, describe_check_result(&check).as_str())?;
    }

    Ok(())
}

/// Merges the environment file with command line arguments, the latter take precedence.
fn get_environment_config(matches: &ArgMatches) -> Result<EnvironmentConfig, String> {
    let from_file = matches
        .get_one::<String>(ENVIRONMENT_ARG_NAME)
        .map(|path| read_environment_config(BufReader::new(open_file(path, "environment"))))
        .transpose()
        .map_err(|err| err.to_string())?
        .unwrap_or_default();

    let from_args = EnvironmentConfig {
        instance_path: matches.get_one::<String>(INSTANCE_ARG_NAME).cloned(),
        solution_path: matches.get_one::<String>(SOLUTION_ARG_NAME).cloned(),
        rand_seed: parse_arg_value::<u64>(matches, SEED_ARG_NAME, "random seed")?,
        timeout: parse_arg_value::<f64>(matches, TIMEOUT_ARG_NAME, "timeout")?,
        max_iterations: parse_arg_value::<usize>(matches, MAX_ITERATIONS_ARG_NAME, "max iterations")?,
        jobs: parse_arg_value::<i64>(matches, JOBS_ARG_NAME, "jobs")?,
        run_id: matches.get_one::<String>(RUN_ID_ARG_NAME).cloned(),
        config_path: matches.get_one::<String>(CONFIG_ARG_NAME).cloned(),
        log_path: matches.get_one::<String>(LOG_PATH_ARG_NAME).cloned(),
    };

    Ok(from_file.merge(from_args))
}

fn create_environment(settings: &EnvironmentConfig, logger: InfoLogger) -> Environment {
    let timeout_ms = settings.timeout.map(|secs| calibrate_timeout((secs.max(0.) * 1000.) as u64));

    let environment = match create_interruption_quota(timeout_ms) {
        Ok(quota) => Environment { quota: Some(quota), ..Environment::default() },
        Err(err) => {
            (logger)(&format!("[framework] {err}, only the time budget is used"));
            Environment::new_with_time_quota(timeout_ms)
        }
    };

    environment
        .with_seed(settings.rand_seed)
        .with_jobs(settings.jobs)
        .with_logger(logger)
}

fn report_check_outcome(result: &SearchResult, outcome: CheckerOutcome, description: &str) -> Result<(), String> {
    match outcome {
        CheckerOutcome::Feasible { objective } => {
            println!(
                "{description}, self-reported objective: {:.4}, difference: {:.4}",
                result.objective,
                result.objective - objective
            );
            Ok(())
        }
        CheckerOutcome::Infeasible { flags } => {
            Err(format!("strategy produced an infeasible solution: {flags}, worker {}", result.worker_idx))
        }
        CheckerOutcome::IoError => Err("checker cannot read the instance or the solution".to_string()),
    }
}
