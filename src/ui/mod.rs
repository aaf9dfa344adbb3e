pub mod toggle;

pub use toggle::ThemeToggleControl;
