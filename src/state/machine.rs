use super::error::{StateError, StateResult};
use super::event::{HydrationEvent, PhaseTransition};
use super::model::HydrationPhase;

/// Two-phase guard that lets exactly one resolution pass through.
///
/// `Resolved` is terminal: every event in that phase is rejected.
#[derive(Debug, Default)]
pub struct HydrationGuard {
    phase: HydrationPhase,
    transition_history: Vec<PhaseTransition>,
}

impl HydrationGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> HydrationPhase {
        self.phase
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == HydrationPhase::Resolved
    }

    pub fn can_transition(&self, event: HydrationEvent) -> bool {
        self.next_phase(event).is_some()
    }

    pub fn next_phase(&self, event: HydrationEvent) -> Option<HydrationPhase> {
        match (self.phase, event) {
            (HydrationPhase::Unresolved, HydrationEvent::Mount | HydrationEvent::Toggle) => {
                Some(HydrationPhase::Resolved)
            }
            (HydrationPhase::Resolved, _) => None,
        }
    }

    pub fn transition(&mut self, event: HydrationEvent) -> StateResult<HydrationPhase> {
        tracing::debug!(from = ?self.phase, ?event, "request hydration transition");
        let next = self.next_phase(event).ok_or_else(|| {
            let from = self.phase;
            tracing::debug!(?from, ?event, "hydration transition rejected");
            StateError::InvalidTransition { from, event }
        })?;

        self.transition_history
            .push(PhaseTransition::new(self.phase, event, next));
        self.phase = next;

        Ok(self.phase)
    }

    pub fn history(&self) -> &[PhaseTransition] {
        &self.transition_history
    }
}

impl std::fmt::Display for HydrationGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HydrationPhase::{:?}", self.phase)
    }
}
