use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::document::DocumentRoot;
use crate::state::{HydrationEvent, HydrationGuard, HydrationPhase, ThemeState};
use crate::storage::PersistenceSink;
use crate::theme::{resolve_preference, ColorSchemeSignal, ThemePreference};

/// Shared, single-threaded handle to the page's one store.
pub type ThemeHandle = Rc<ThemeStore>;

type Subscriber = Rc<dyn Fn(ThemePreference)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Reactive holder of [`ThemeState`].
///
/// `current` changes through exactly two paths: the one-time mount
/// resolution and [`ThemeStore::toggle`]. Every applied change is written
/// through to the sink, mirrored onto the document marker, and then
/// published to subscribers, in that order.
pub struct ThemeStore {
    state: Cell<ThemeState>,
    guard: RefCell<HydrationGuard>,
    sink: RefCell<PersistenceSink>,
    document: RefCell<Box<dyn DocumentRoot>>,
    signal: Box<dyn ColorSchemeSignal>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
    notifying: Cell<bool>,
    queued_toggles: Cell<usize>,
}

impl ThemeStore {
    /// Starts in the fixed default state without touching storage, the
    /// signal, or the document.
    pub fn new(
        sink: PersistenceSink,
        document: Box<dyn DocumentRoot>,
        signal: Box<dyn ColorSchemeSignal>,
    ) -> Self {
        Self {
            state: Cell::new(ThemeState::default()),
            guard: RefCell::new(HydrationGuard::new()),
            sink: RefCell::new(sink),
            document: RefCell::new(document),
            signal,
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            notifying: Cell::new(false),
            queued_toggles: Cell::new(0),
        }
    }

    pub fn into_handle(self) -> ThemeHandle {
        Rc::new(self)
    }

    pub fn current(&self) -> ThemePreference {
        self.state.get().current
    }

    pub fn is_resolved(&self) -> bool {
        self.state.get().resolved
    }

    pub fn state(&self) -> ThemeState {
        self.state.get()
    }

    pub fn phase(&self) -> HydrationPhase {
        self.guard.borrow().phase()
    }

    /// Runs the one resolution pass. Returns `false` when the guard has
    /// already resolved, in which case nothing is read or written.
    pub fn mount(&self) -> bool {
        if let Err(err) = self.guard.borrow_mut().transition(HydrationEvent::Mount) {
            tracing::debug!(%err, "theme already resolved; ignoring mount");
            return false;
        }

        let resolved = resolve_preference(&self.sink.borrow(), self.signal.as_ref());
        tracing::info!(theme = %resolved, "theme resolved after mount");
        self.apply(resolved);
        true
    }

    /// Flips the theme and returns the new value. Never fails.
    ///
    /// A toggle before mount counts as the resolution, so the later mount
    /// leaves the explicit choice alone. A toggle issued from a subscriber
    /// is queued and applied once the current notification round ends;
    /// the returned value is what the store will hold at that point.
    pub fn toggle(&self) -> ThemePreference {
        {
            let mut guard = self.guard.borrow_mut();
            if !guard.is_resolved() {
                if let Ok(phase) = guard.transition(HydrationEvent::Toggle) {
                    tracing::debug!(?phase, "toggle resolved theme before mount");
                }
            }
        }

        if self.notifying.get() {
            let queued = self.queued_toggles.get() + 1;
            self.queued_toggles.set(queued);
            tracing::debug!(queued, "toggle queued until subscribers finish");
            return if queued % 2 == 1 {
                self.current().toggled()
            } else {
                self.current()
            };
        }

        let next = self.current().toggled();
        tracing::info!(theme = %next, "theme toggled");
        self.apply(next);
        next
    }

    pub fn subscribe(&self, callback: impl Fn(ThemePreference) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }

    pub fn has_marker(&self) -> bool {
        self.document.borrow().has_marker()
    }

    pub fn render_root(&self) -> String {
        self.document.borrow().render_open_tag()
    }

    fn apply(&self, value: ThemePreference) {
        let mut value = value;
        loop {
            self.state.set(ThemeState {
                current: value,
                resolved: true,
            });
            self.sink.borrow_mut().save(value);
            self.document.borrow_mut().set_marker(value.is_dark());
            self.notify(value);

            let queued = self.queued_toggles.get();
            if queued == 0 {
                break;
            }
            self.queued_toggles.set(queued - 1);
            value = value.toggled();
            tracing::info!(theme = %value, "queued theme toggle applied");
        }
    }

    fn notify(&self, value: ThemePreference) {
        // Callbacks may subscribe or toggle again; run them with no borrow held.
        let subscribers = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect::<Vec<_>>();
        self.notifying.set(true);
        for callback in subscribers {
            callback(value);
        }
        self.notifying.set(false);
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("state", &self.state.get())
            .field("phase", &self.guard.borrow().phase())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}
