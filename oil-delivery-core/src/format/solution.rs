#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use crate::models::Solution;
use crate::utils::{GenericError, GenericResult};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};

/// Describes who and how produced the solution. Written as the first line of a solution file.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Author name.
    pub author: String,
    /// Algorithm name.
    pub algorithm: String,
    /// Instance name.
    pub instance: String,
    /// Search duration in seconds.
    pub duration: f64,
    /// Amount of threads used.
    pub thread: usize,
    /// Cpu description.
    pub cpu: String,
    /// Memory description.
    pub ram: String,
    /// Implementation language.
    pub language: String,
    /// Compiler used to build the solver.
    pub compiler: String,
    /// Operating system.
    pub os: String,
    /// Problem name.
    pub problem: String,
}

impl Submission {
    /// Creates a submission filled with host information.
    pub fn new(author: &str, algorithm: &str, instance: &str, duration: f64, thread: usize) -> Self {
        Self {
            author: author.to_string(),
            algorithm: algorithm.to_string(),
            instance: instance.to_string(),
            duration,
            thread,
            cpu: format!("{} logical cpus", num_cpus::get()),
            ram: String::default(),
            language: "Rust".to_string(),
            compiler: "rustc".to_string(),
            os: std::env::consts::OS.to_string(),
            problem: "OilDelivery".to_string(),
        }
    }
}

/// Serializes submission header and solution into the solution file format.
pub fn serialize_solution<W: Write>(
    writer: &mut BufWriter<W>,
    submission: &Submission,
    solution: &Solution,
) -> GenericResult<()> {
    serde_json::to_writer(&mut *writer, submission)?;
    writeln!(writer)?;
    serde_json::to_writer_pretty(&mut *writer, solution)?;
    writer.flush().map_err(GenericError::from)
}

/// Deserializes solution from the solution file format, skipping the submission header.
pub fn deserialize_solution<R: Read>(mut reader: BufReader<R>) -> GenericResult<Solution> {
    let mut header = String::new();
    reader.read_line(&mut header)?;

    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize solution: '{err}'").into())
}

/// Deserializes submission header from the solution file format.
pub fn deserialize_submission<R: Read>(mut reader: BufReader<R>) -> GenericResult<Submission> {
    let mut header = String::new();
    reader.read_line(&mut header)?;

    serde_json::from_str(header.trim()).map_err(|err| format!("cannot deserialize submission: '{err}'").into())
}
