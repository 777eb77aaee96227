//! Appends a one-line summary of a solver run to a csv log file.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/audit_test.rs"]
mod audit_test;

use lazy_static::lazy_static;
use oil_delivery_core::utils::{GenericError, GenericResult};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Column names of the audit log.
pub const AUDIT_HEADER: [&str; 11] = [
    "Time",
    "ID",
    "Instance",
    "Feasible",
    "ObjMatch",
    "Objective",
    "Duration",
    "RandSeed",
    "Config",
    "Iterations",
    "CheckerObjective",
];

lazy_static! {
    static ref AUDIT_LOCK: Mutex<()> = Mutex::new(());
}

/// A summary of one solver run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuditRecord {
    /// Run identifier.
    pub run_id: String,
    /// Instance path.
    pub instance: String,
    /// True if the checker accepted the solution.
    pub is_feasible: bool,
    /// Self-reported objective.
    pub objective: f64,
    /// Objective computed by the checker, zero when infeasible.
    pub checker_objective: f64,
    /// Search duration in seconds.
    pub duration: f64,
    /// Random seed, if any.
    pub seed: Option<u64>,
    /// Config path, if any.
    pub config: Option<String>,
    /// Amount of attempts of the winning worker.
    pub iterations: usize,
}

impl AuditRecord {
    fn to_row(&self, time: &str) -> Vec<String> {
        vec![
            time.to_string(),
            self.run_id.clone(),
            self.instance.clone(),
            (self.is_feasible as u8).to_string(),
            format!("{:.4}", self.objective - self.checker_objective),
            format!("{:.4}", self.objective),
            format!("{:.3}", self.duration),
            self.seed.map(|seed| seed.to_string()).unwrap_or_default(),
            self.config.clone().unwrap_or_default(),
            self.iterations.to_string(),
            format!("{:.4}", self.checker_objective),
        ]
    }
}

/// Appends the record to the log file, writing the header first when the file is empty.
pub fn append_audit_record(path: &Path, record: &AuditRecord) -> GenericResult<()> {
    let time = OffsetDateTime::now_utc().format(&Rfc3339).map_err(|err| format!("cannot format time: '{err}'"))?;

    let _guard = AUDIT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let is_empty = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
    let map_err = |err: csv::Error| GenericError::from(format!("cannot write audit record: '{err}'"));

    if is_empty {
        writer.write_record(AUDIT_HEADER).map_err(map_err)?;
    }

    writer.write_record(record.to_row(time.as_str())).map_err(map_err)?;
    writer.flush().map_err(GenericError::from)
}
