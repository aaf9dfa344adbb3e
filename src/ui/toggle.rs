use crate::context::ThemeContext;
use crate::theme::ThemePreference;

const SUN_ICON: &str = "sun";
const MOON_ICON: &str = "moon";

/// The light/dark switch shown in the navigation bar and footer.
///
/// Built only on a [`ThemeContext`], so it renders and clicks safely even
/// when mounted outside the provider.
#[derive(Debug, Clone)]
pub struct ThemeToggleControl {
    context: ThemeContext,
}

impl ThemeToggleControl {
    pub fn new(context: ThemeContext) -> Self {
        Self { context }
    }

    pub fn theme(&self) -> ThemePreference {
        self.context.read_theme()
    }

    /// Moon while light (the action on offer), sun while dark.
    pub fn icon(&self) -> &'static str {
        match self.theme() {
            ThemePreference::Light => MOON_ICON,
            ThemePreference::Dark => SUN_ICON,
        }
    }

    pub fn aria_label(&self) -> String {
        format!("Switch to {} mode", self.theme().toggled())
    }

    pub fn click(&self) {
        self.context.binding().toggle_theme();
    }
}
