#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use oil_delivery_cli::extensions::generate::{InstanceRanges, generate_instance};
use oil_delivery_core::format::serialize_instance;
use oil_delivery_core::models::validate_instance;
use oil_delivery_core::utils::{DefaultRandom, GenericError};

pub const OUT_RESULT_ARG_NAME: &str = "out-result";
pub const SEED_ARG_NAME: &str = "seed";
pub const STATIONS_SIZE_ARG_NAME: &str = "stations-size";
pub const VEHICLES_SIZE_ARG_NAME: &str = "vehicles-size";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates a random instance within the limits of the reference problem")
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed to get a repeatable instance")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(STATIONS_SIZE_ARG_NAME)
                .help("Amount of gas stations, random in [10, 110] when not set")
                .long(STATIONS_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(VEHICLES_SIZE_ARG_NAME)
                .help("Amount of vehicles, random in [2, 10] when not set")
                .long(VEHICLES_SIZE_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate(matches: &ArgMatches) -> Result<(), String> {
    let seed = parse_arg_value::<u64>(matches, SEED_ARG_NAME, "random seed")?;
    let stations_size = parse_arg_value::<usize>(matches, STATIONS_SIZE_ARG_NAME, "stations size")?;
    let vehicles_size = parse_arg_value::<usize>(matches, VEHICLES_SIZE_ARG_NAME, "vehicles size")?;

    let random = DefaultRandom::new_with_seed(seed);
    let instance = generate_instance(&random, &InstanceRanges::default(), stations_size, vehicles_size);

    validate_instance(&instance, true).map_err(|errors| {
        format!("generated instance has validation errors:\n{}", GenericError::join_many(errors.as_slice(), "\n"))
    })?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let mut out_buffer = create_write_buffer(out_result);

    serialize_instance(&instance, &mut out_buffer)
        .and_then(|_| out_buffer.flush().map_err(GenericError::from))
        .map_err(|err| format!("cannot serialize instance: '{err}'"))
}
