use std::rc::Rc;

use crate::store::{ThemeHandle, ThemeStore};
use crate::theme::ThemePreference;

/// What a consumer finds in its ambient context: the page's store, or
/// nothing because it was rendered outside the provider.
#[derive(Debug, Clone, Default)]
pub enum ThemeContext {
    Provided(ThemeHandle),
    #[default]
    Absent,
}

impl ThemeContext {
    pub fn is_provided(&self) -> bool {
        matches!(self, Self::Provided(_))
    }

    /// The store's value, or the default when no store is reachable.
    pub fn read_theme(&self) -> ThemePreference {
        match self {
            Self::Provided(store) => store.current(),
            Self::Absent => ThemePreference::default(),
        }
    }

    /// Forwards to the store; without one this does nothing.
    pub fn toggle_theme(&self) {
        match self {
            Self::Provided(store) => {
                store.toggle();
            }
            Self::Absent => {
                tracing::warn!("theme toggle not available; no theme provider in context");
            }
        }
    }

    /// The whole surface consumers may depend on.
    pub fn binding(&self) -> ThemeBinding {
        ThemeBinding {
            theme: self.read_theme(),
            context: self.clone(),
        }
    }
}

/// `{ theme, toggle_theme() }` as handed to navigation and footer controls.
#[derive(Debug, Clone)]
pub struct ThemeBinding {
    pub theme: ThemePreference,
    context: ThemeContext,
}

impl ThemeBinding {
    pub fn toggle_theme(&self) {
        self.context.toggle_theme();
    }
}

/// Owns the page's store for the lifetime of the root mount and hands out
/// contexts to the tree below it.
#[derive(Debug)]
pub struct ThemeProvider {
    store: ThemeHandle,
}

impl ThemeProvider {
    pub fn new(store: ThemeStore) -> Self {
        Self {
            store: store.into_handle(),
        }
    }

    pub fn context(&self) -> ThemeContext {
        ThemeContext::Provided(Rc::clone(&self.store))
    }

    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// The runtime's first post-mount opportunity.
    pub fn mount(&self) -> bool {
        self.store.mount()
    }
}
