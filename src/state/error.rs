use super::event::HydrationEvent;
use super::model::HydrationPhase;
use thiserror::Error;

pub type StateResult<T> = std::result::Result<T, StateError>;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("invalid hydration transition: from {from:?} using event {event:?}")]
    InvalidTransition {
        from: HydrationPhase,
        event: HydrationEvent,
    },
}
