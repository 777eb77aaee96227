//! Interruption handler.

use lazy_static::lazy_static;
use oil_delivery_core::utils::{FlagQuota, GenericError, GenericResult, Quota, TimeQuota};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

lazy_static! {
    static ref SHOULD_INTERRUPT: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
    static ref HANDLER_REGISTRATION: Result<(), String> = {
        let should_interrupt = SHOULD_INTERRUPT.clone();
        ctrlc::set_handler(move || should_interrupt.store(true, Ordering::Relaxed))
            .map_err(|err| format!("cannot set interruption handler: '{err}'"))
    };
}

/// Creates a quota which is reached on Ctrl-C or when `max_time_ms` is elapsed.
/// The signal handler is registered once per process.
pub fn create_interruption_quota(max_time_ms: Option<u64>) -> GenericResult<Arc<dyn Quota + Send + Sync>> {
    HANDLER_REGISTRATION.clone().map_err(GenericError::from)?;

    let inner =
        max_time_ms.map::<Arc<dyn Quota + Send + Sync>, _>(|ms| Arc::new(TimeQuota::new(ms as f64 / 1000.)));

    Ok(Arc::new(FlagQuota::new(inner, SHOULD_INTERRUPT.clone())))
}
