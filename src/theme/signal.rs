/// One-shot query of the environment's dark-mode preference.
///
/// Read once at resolution time; never subscribed to.
pub trait ColorSchemeSignal {
    fn prefers_dark(&self) -> bool;
}

/// Signal with a fixed answer, used for `--prefers-dark` and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedColorScheme(pub bool);

impl ColorSchemeSignal for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// Reads the desktop preference from the process environment.
///
/// An explicit override from `config.json` wins; otherwise `GTK_THEME`
/// (e.g. `Adwaita:dark`) is inspected for a dark/light keyword.
#[derive(Debug, Clone, Default)]
pub struct EnvColorScheme {
    override_dark: Option<bool>,
    gtk_theme: Option<String>,
}

impl EnvColorScheme {
    pub fn from_env(override_dark: Option<bool>) -> Self {
        Self {
            override_dark,
            gtk_theme: std::env::var("GTK_THEME").ok(),
        }
    }

    pub fn with_values(override_dark: Option<bool>, gtk_theme: Option<&str>) -> Self {
        Self {
            override_dark,
            gtk_theme: gtk_theme.map(str::to_string),
        }
    }
}

impl ColorSchemeSignal for EnvColorScheme {
    fn prefers_dark(&self) -> bool {
        if let Some(dark) = self.override_dark {
            return dark;
        }
        let detected = self.gtk_theme.as_deref().and_then(dark_from_theme_name);
        tracing::debug!(gtk_theme = ?self.gtk_theme, ?detected, "queried environment color scheme");
        detected.unwrap_or(false)
    }
}

fn dark_from_theme_name(theme_name: &str) -> Option<bool> {
    let normalized = theme_name.trim().to_ascii_lowercase();
    if normalized.is_empty() {
        return None;
    }
    if normalized.contains("dark") {
        return Some(true);
    }
    if normalized.contains("light") {
        return Some(false);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_from_theme_name_detects_dark_and_light_keywords() {
        assert_eq!(dark_from_theme_name("Adwaita:dark"), Some(true));
        assert_eq!(dark_from_theme_name("MyLightTheme"), Some(false));
        assert_eq!(dark_from_theme_name("Adwaita"), None);
        assert_eq!(dark_from_theme_name("  "), None);
    }

    #[test]
    fn env_signal_prefers_explicit_override() {
        let signal = EnvColorScheme::with_values(Some(false), Some("Adwaita-dark"));
        assert!(!signal.prefers_dark());

        let signal = EnvColorScheme::with_values(Some(true), None);
        assert!(signal.prefers_dark());
    }

    #[test]
    fn env_signal_without_hints_is_not_dark() {
        assert!(!EnvColorScheme::with_values(None, None).prefers_dark());
        assert!(!EnvColorScheme::with_values(None, Some("Adwaita")).prefers_dark());
        assert!(EnvColorScheme::with_values(None, Some("Adwaita:dark")).prefers_dark());
    }
}
