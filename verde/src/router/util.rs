use std::collections::BTreeSet;

use verde_core::{Capability, Ticker, VerdeError};

/// Join a collection of tasks and apply an optional request-level deadline.
///
/// This wraps `futures::future::join_all(tasks)` with `crate::core::with_request_deadline`.
/// On timeout, the inner helper returns `VerdeError::RequestTimeout("request")` which
/// call sites can remap to a more specific capability label as needed.
///
/// # Errors
/// Returns `RequestTimeout` when the deadline expires before every task has
/// finished.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, VerdeError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    crate::core::with_request_deadline(deadline, futures::future::join_all(tasks)).await
}

/// Collapse a set of provider errors into a uniform `VerdeError` outcome.
///
/// Rules:
/// - If `attempted_any` is false → `Unsupported(capability)`.
/// - If all errors are `ProviderTimeout` → `AllProvidersTimedOut(capability)`.
/// - If `not_found_what` is `Some` and all errors are `NotFound` → `NotFound(what)`.
/// - Else → `AllProvidersFailed(errors)`.
#[must_use]
pub fn collapse_errors(
    capability: Capability,
    attempted_any: bool,
    errors: Vec<VerdeError>,
    not_found_what: Option<String>,
) -> VerdeError {
    if !attempted_any {
        return VerdeError::unsupported(capability.to_string());
    }
    if !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, VerdeError::ProviderTimeout { .. }))
    {
        return VerdeError::AllProvidersTimedOut {
            capability: capability.to_string(),
        };
    }
    if let Some(what) = not_found_what
        && !errors.is_empty()
        && errors
            .iter()
            .all(|e| matches!(e, VerdeError::NotFound { .. }))
    {
        return VerdeError::not_found(what);
    }
    VerdeError::AllProvidersFailed(errors)
}

/// Check a request universe: at least `min` tickers and no duplicates.
///
/// Tickers are canonical by construction (trimmed, uppercased), so a
/// duplicate here is an exact repeat of the same symbol.
pub(crate) fn validate_universe(tickers: &[Ticker], min: usize) -> Result<(), VerdeError> {
    if tickers.len() < min {
        return Err(VerdeError::InvalidArg(format!(
            "need at least {min} distinct ticker(s), got {}",
            tickers.len()
        )));
    }
    let mut seen = BTreeSet::new();
    for ticker in tickers {
        if !seen.insert(ticker) {
            return Err(VerdeError::InvalidArg(format!(
                "duplicate ticker {ticker} in request"
            )));
        }
    }
    Ok(())
}

/// Replace the generic "request" deadline label with the operation's own.
pub(crate) fn relabel_request_timeout(e: VerdeError, operation: &str) -> VerdeError {
    match e {
        VerdeError::RequestTimeout { .. } => VerdeError::request_timeout(operation),
        other => other,
    }
}
