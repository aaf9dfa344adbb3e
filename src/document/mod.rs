use std::collections::BTreeSet;

/// The root presentation node styling keys off.
pub trait DocumentRoot {
    fn set_marker(&mut self, present: bool);
    fn has_marker(&self) -> bool;
    /// Opening tag of the root node, as it would appear in markup.
    fn render_open_tag(&self) -> String;
}

/// In-memory `<html>` element with a class list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootElement {
    lang: String,
    marker: String,
    classes: BTreeSet<String>,
}

impl RootElement {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            lang: "en".to_string(),
            marker: marker.into(),
            classes: BTreeSet::new(),
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.insert(class.into());
        self
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl DocumentRoot for RootElement {
    fn set_marker(&mut self, present: bool) {
        if present {
            self.classes.insert(self.marker.clone());
        } else {
            self.classes.remove(&self.marker);
        }
    }

    fn has_marker(&self) -> bool {
        self.classes.contains(&self.marker)
    }

    fn render_open_tag(&self) -> String {
        let classes = self.classes.iter().map(String::as_str).collect::<Vec<_>>();
        format!(
            "<html lang=\"{}\" class=\"{}\">",
            self.lang,
            classes.join(" ")
        )
    }
}
