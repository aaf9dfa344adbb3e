use crate::theme::ThemePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HydrationPhase {
    #[default]
    Unresolved,
    Resolved,
}

/// Snapshot of the store for one loaded page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub current: ThemePreference,
    pub resolved: bool,
}
