use super::model::HydrationPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HydrationEvent {
    /// First post-mount opportunity; environment reads are safe from here on.
    Mount,
    /// The user toggled before the mount pass ran.
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: HydrationPhase,
    pub event: HydrationEvent,
    pub to: HydrationPhase,
}

impl PhaseTransition {
    pub const fn new(from: HydrationPhase, event: HydrationEvent, to: HydrationPhase) -> Self {
        Self { from, event, to }
    }
}
