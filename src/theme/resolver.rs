use super::signal::ColorSchemeSignal;
use super::ThemePreference;
use crate::storage::PersistenceSink;

/// Ordered precedence: stored choice, then the OS signal, then `light`.
pub fn pick_preference(stored: Option<ThemePreference>, os_prefers_dark: bool) -> ThemePreference {
    match stored {
        Some(preference) => preference,
        None if os_prefers_dark => ThemePreference::Dark,
        None => ThemePreference::default(),
    }
}

/// Reads both ambient signals and picks the effective preference.
///
/// Has no side effects of its own; a failing store reads as "nothing stored".
/// The OS signal is only queried when nothing usable is stored.
pub fn resolve_preference(
    sink: &PersistenceSink,
    signal: &dyn ColorSchemeSignal,
) -> ThemePreference {
    let stored = sink.load();
    let resolved = match stored {
        Some(_) => pick_preference(stored, false),
        None => pick_preference(None, signal.prefers_dark()),
    };
    tracing::debug!(?stored, %resolved, "resolved theme preference");
    resolved
}
