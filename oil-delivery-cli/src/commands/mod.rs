use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod check;
pub mod generate;
pub mod solve;

use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::process;
use std::str::FromStr;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

/// Opens an input file or terminates the process.
fn open_file(path: &str, description: &str) -> File {
    File::open(path).unwrap_or_else(|err| exit_on_file_error("open", description, path, err))
}

/// Creates an output file or terminates the process.
fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| exit_on_file_error("create", description, path, err))
}

fn exit_on_file_error(action: &str, description: &str, path: &str, err: std::io::Error) -> ! {
    eprintln!("cannot {action} {description} file '{path}': '{err}'");
    process::exit(1)
}

/// Parses an optional argument value, reporting its description on failure.
fn parse_arg_value<T>(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    matches
        .get_one::<String>(arg_name)
        .map(|arg| arg.trim().parse::<T>().map_err(|err| format!("cannot parse {arg_desc} '{arg}': '{err}'")))
        .transpose()
}
