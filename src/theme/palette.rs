use super::ThemePreference;

/// Colors keyed by theme. Presentation code never picks these itself; it
/// reads the custom properties emitted by [`render_marker_stylesheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColorTokens {
    pub(crate) page_background: &'static str,
    pub(crate) surface_background: &'static str,
    pub(crate) text_primary: &'static str,
    pub(crate) text_secondary: &'static str,
    pub(crate) text_muted: &'static str,
    pub(crate) accent: &'static str,
    pub(crate) link: &'static str,
    pub(crate) border_color: &'static str,
}

const LIGHT_TOKENS: ColorTokens = ColorTokens {
    page_background: "#ffffff",
    surface_background: "#f0f4ff",
    text_primary: "#1a1f36",
    text_secondary: "#4338ca",
    text_muted: "#6366f1",
    accent: "#d97706",
    link: "#4f46e5",
    border_color: "#e0e7ff",
};

const DARK_TOKENS: ColorTokens = ColorTokens {
    page_background: "#1a1f36",
    surface_background: "#252b42",
    text_primary: "#ffffff",
    text_secondary: "#b8c1d9",
    text_muted: "#8892b0",
    accent: "#ffa500",
    link: "#4a9eff",
    border_color: "#312e81",
};

pub(crate) const fn color_tokens_for(preference: ThemePreference) -> ColorTokens {
    match preference {
        ThemePreference::Light => LIGHT_TOKENS,
        ThemePreference::Dark => DARK_TOKENS,
    }
}

/// Light tokens on `:root`, dark tokens on `:root.<marker>`.
pub fn render_marker_stylesheet(marker: &str) -> String {
    format!(
        ":root {{\n{light}}}\n:root.{marker} {{\n{dark}}}\n",
        light = custom_properties(&color_tokens_for(ThemePreference::Light)),
        dark = custom_properties(&color_tokens_for(ThemePreference::Dark)),
    )
}

fn custom_properties(tokens: &ColorTokens) -> String {
    [
        ("page-background", tokens.page_background),
        ("surface-background", tokens.surface_background),
        ("text-primary", tokens.text_primary),
        ("text-secondary", tokens.text_secondary),
        ("text-muted", tokens.text_muted),
        ("accent", tokens.accent),
        ("link", tokens.link),
        ("border-color", tokens.border_color),
    ]
    .iter()
    .map(|(name, value)| format!("  --{name}: {value};\n"))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_follow_preference() {
        assert_eq!(
            color_tokens_for(ThemePreference::Light).page_background,
            "#ffffff"
        );
        assert_eq!(
            color_tokens_for(ThemePreference::Dark).page_background,
            "#1a1f36"
        );
    }

    #[test]
    fn stylesheet_keys_dark_tokens_off_marker_class() {
        let css = render_marker_stylesheet("dark");
        let (light, dark) = css.split_once(":root.dark {").expect("marker block");

        assert!(light.starts_with(":root {"));
        assert!(light.contains("--page-background: #ffffff;"));
        assert!(dark.contains("--page-background: #1a1f36;"));
        assert!(dark.contains("--accent: #ffa500;"));
    }

    #[test]
    fn stylesheet_honours_custom_marker() {
        let css = render_marker_stylesheet("theme-dark");
        assert!(css.contains(":root.theme-dark {"));
    }
}
