use std::cell::RefCell;
use std::rc::Rc;

use folio_theme::document::RootElement;
use folio_theme::storage::{PersistenceSink, PreferenceStorage, StorageResult};
use folio_theme::theme::FixedColorScheme;
use folio_theme::ui::ThemeToggleControl;
use folio_theme::{ThemeContext, ThemePreference, ThemeProvider, ThemeStore};

#[derive(Default, Clone)]
struct SharedStorage {
    value: Rc<RefCell<Option<String>>>,
    writes: Rc<RefCell<usize>>,
}

impl PreferenceStorage for SharedStorage {
    fn get_item(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn set_item(&mut self, _key: &str, value: &str) -> StorageResult<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

fn page_load(storage: &SharedStorage, os_dark: bool) -> ThemeProvider {
    ThemeProvider::new(ThemeStore::new(
        PersistenceSink::new(Box::new(storage.clone()), "theme"),
        Box::new(RootElement::new("dark")),
        Box::new(FixedColorScheme(os_dark)),
    ))
}

#[test]
fn fresh_browser_with_dark_os_resolves_dark_and_stores_it() {
    let storage = SharedStorage::default();
    let provider = page_load(&storage, true);
    assert_eq!(provider.context().read_theme(), ThemePreference::Light);

    assert!(provider.mount());
    assert_eq!(provider.context().read_theme(), ThemePreference::Dark);
    assert_eq!(storage.value.borrow().as_deref(), Some("dark"));
}

#[test]
fn stored_light_beats_dark_os() {
    let storage = SharedStorage::default();
    *storage.value.borrow_mut() = Some("light".to_string());

    let provider = page_load(&storage, true);
    provider.mount();
    assert_eq!(provider.context().read_theme(), ThemePreference::Light);
}

#[test]
fn toggling_from_dark_removes_marker_and_stores_light() {
    let storage = SharedStorage::default();
    *storage.value.borrow_mut() = Some("dark".to_string());
    let provider = page_load(&storage, false);
    provider.mount();
    assert!(provider.store().has_marker());
    let writes_after_mount = *storage.writes.borrow();

    ThemeToggleControl::new(provider.context()).click();

    assert_eq!(provider.context().read_theme(), ThemePreference::Light);
    assert_eq!(storage.value.borrow().as_deref(), Some("light"));
    assert!(!provider.store().has_marker());
    assert_eq!(*storage.writes.borrow(), writes_after_mount + 1);
}

#[test]
fn preference_carries_over_to_next_page_load() {
    let storage = SharedStorage::default();
    let first = page_load(&storage, false);
    first.mount();
    first.context().toggle_theme();
    drop(first);

    let second = page_load(&storage, false);
    second.mount();
    assert_eq!(second.context().read_theme(), ThemePreference::Dark);
}

#[test]
fn consumer_outside_provider_degrades_to_light() {
    let control = ThemeToggleControl::new(ThemeContext::Absent);
    control.click();
    assert_eq!(control.theme(), ThemePreference::Light);
    assert_eq!(control.aria_label(), "Switch to dark mode");
}
