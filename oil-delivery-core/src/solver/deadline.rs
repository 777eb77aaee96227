#[cfg(test)]
#[path = "../../tests/unit/solver/deadline_test.rs"]
mod deadline_test;

use crate::utils::{Quota, TimeQuota};
use std::sync::Arc;
use std::time::Duration;

/// A wall-clock cutoff shared by all workers of one search.
///
/// It is set once before the workers start and only polled afterwards. Workers check it between
/// periods, nothing is interrupted in the middle of a period.
#[derive(Clone)]
pub struct Deadline {
    quota: Option<Arc<dyn Quota + Send + Sync>>,
}

impl Deadline {
    /// Creates a deadline which expires after given duration, counting from now.
    pub fn new(budget: Duration) -> Self {
        Self { quota: Some(Arc::new(TimeQuota::new(budget.as_secs_f64()))) }
    }

    /// Creates a deadline which expires when given quota is reached.
    pub fn from_quota(quota: Arc<dyn Quota + Send + Sync>) -> Self {
        Self { quota: Some(quota) }
    }

    /// Creates a deadline which never expires.
    pub fn unbounded() -> Self {
        Self { quota: None }
    }

    /// Returns true if the cutoff is passed.
    pub fn is_expired(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl From<Option<Arc<dyn Quota + Send + Sync>>> for Deadline {
    fn from(quota: Option<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { quota }
    }
}
