use tessera_core::{Capability, TesseraError};

/// Reject blank user names and ids before any provider is contacted.
pub(crate) fn require_subject(subject: &str) -> Result<(), TesseraError> {
    if subject.trim().is_empty() {
        return Err(TesseraError::InvalidArg(
            "user must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Collapse a set of provider errors into a uniform `TesseraError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<TesseraError>,
    not_found_what: Option<String>,
) -> TesseraError {
    if !attempted_any {
        return TesseraError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, TesseraError::ProviderTimeout { .. }))
    {
        return TesseraError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, TesseraError::NotFound { .. }))
        && let Some(what) = not_found_what
    {
        return TesseraError::not_found(what);
    }
    TesseraError::AllProvidersFailed(errors)
}
