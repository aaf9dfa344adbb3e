pub mod error;
pub mod event;
pub mod machine;
pub mod model;

pub use error::{StateError, StateResult};
pub use event::{HydrationEvent, PhaseTransition};
pub use machine::HydrationGuard;
pub use model::{HydrationPhase, ThemeState};
