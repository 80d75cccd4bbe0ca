//! Management of the client-local threshold override.
//!
//! Unlike resolution, these helpers are explicit user actions and report
//! failures instead of swallowing them.

use crate::env::CLIENT_LOG_LEVEL_KEY;
use scoped_log_ports::{ClientStore, Severity};
use scoped_log_shared::{ErrorEnvelope, Result};

/// Read the stored override, rejecting values that are not severities.
pub fn read_client_override(store: &dyn ClientStore) -> Result<Option<Severity>> {
    let Some(raw) = store.get_item(CLIENT_LOG_LEVEL_KEY)? else {
        return Ok(None);
    };
    Severity::parse(&raw).map(Some).map_err(ErrorEnvelope::from)
}

/// Persist `severity` as the override. Takes effect on the next log call.
pub fn set_client_override(store: &dyn ClientStore, severity: Severity) -> Result<()> {
    store.set_item(CLIENT_LOG_LEVEL_KEY, severity.as_str())?;
    Ok(())
}

/// Remove the override so the environment decides again.
pub fn clear_client_override(store: &dyn ClientStore) -> Result<()> {
    store.remove_item(CLIENT_LOG_LEVEL_KEY)?;
    Ok(())
}
