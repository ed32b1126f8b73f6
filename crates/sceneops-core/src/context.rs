//! Scene-context preconditions
//!
//! Two separate stages, run in this order by the dispatcher:
//! 1. [`repair_selection`]: best effort, transform-family tools only
//! 2. [`validate`]: hard check of the capability's selection requirement

use crate::error::DispatchError;
use crate::host::HostContext;
use crate::registry::{CapabilityDescriptor, CapabilityFamily};

/// Promote the most recent scene object to the active selection.
///
/// Runs only for transform-family tools with no active selection. Returns the
/// promoted object's name; `None` when nothing was changed (not a transform,
/// selection already present, empty scene, or the host refused).
pub fn repair_selection(tool: &str, host: &mut dyn HostContext) -> Option<String> {
    if CapabilityFamily::of(tool) != CapabilityFamily::Transform || host.has_active_selection() {
        return None;
    }

    let most_recent = host.objects().pop()?;
    match host.set_active_selection(&most_recent) {
        Ok(()) => {
            tracing::info!("Auto-selected object '{}' for {}", most_recent, tool);
            Some(most_recent)
        }
        Err(e) => {
            tracing::warn!("Could not auto-select '{}' for {}: {}", most_recent, tool, e);
            None
        }
    }
}

/// Check the capability's active-selection requirement.
///
/// # Errors
/// Returns [`DispatchError::Precondition`] if the capability requires an
/// active selection and the host reports none.
pub fn validate(
    descriptor: &CapabilityDescriptor,
    host: &dyn HostContext,
) -> Result<(), DispatchError> {
    if descriptor.requires_active_selection() && !host.has_active_selection() {
        return Err(DispatchError::precondition(descriptor.id()));
    }
    Ok(())
}
