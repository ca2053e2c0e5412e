//! Section selection state, independent of the document.

use crate::config::SectionSpec;

/// Descendants that may receive focus after a section is revealed. The first
/// match in document order wins.
pub const FOCUS_TARGETS: &str = "h1, h2, h3, button, a, [tabindex]:not([tabindex=\"-1\"])";

/// Outcome of a `show` call, applied to the page by the caller.
///
/// Every known section is hidden first; `visible` is the index revealed
/// afterwards, if the name was known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub visible: Option<usize>,
    pub announcement: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SectionSet {
    names: Vec<String>,
    announcements: Vec<String>,
    current: String,
}

impl SectionSet {
    pub fn new<'a>(specs: impl IntoIterator<Item = &'a SectionSpec>, initial: &str) -> Self {
        let (names, announcements): (Vec<_>, Vec<_>) = specs
            .into_iter()
            .map(|s| (s.name.clone(), s.announcement().into_owned()))
            .unzip();
        Self {
            names,
            announcements,
            current: initial.to_owned(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn show(&mut self, name: &str) -> Transition {
        match self.index_of(name) {
            Some(index) => {
                self.current = name.to_owned();
                Transition {
                    visible: Some(index),
                    announcement: Some(self.announcements[index].clone()),
                }
            }
            None => Transition {
                visible: None,
                announcement: None,
            },
        }
    }
}

/// Keyboard intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Enter or Space on a focused control.
    Activate,
    /// Escape anywhere.
    Home,
}

impl NavKey {
    /// Classify a `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(NavKey::Activate),
            "Escape" => Some(NavKey::Home),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;

    fn default_set() -> SectionSet {
        let config = PageConfig::default();
        SectionSet::new(&config.sections, &config.home_section)
    }

    #[test]
    fn known_section_becomes_current() {
        let mut set = default_set();
        assert_eq!(set.current(), "intro");

        let t = set.show("bio");
        assert_eq!(t.visible, Some(1));
        assert_eq!(t.announcement.as_deref(), Some("Showing about me section"));
        assert_eq!(set.current(), "bio");

        let t = set.show("intro");
        assert_eq!(t.visible, Some(0));
        assert_eq!(
            t.announcement.as_deref(),
            Some("Showing main introduction section")
        );
    }

    #[test]
    fn unknown_section_reveals_nothing() {
        let mut set = default_set();
        set.show("bio");
        let t = set.show("contact");
        assert_eq!(t.visible, None);
        assert_eq!(t.announcement, None);
        assert_eq!(set.current(), "bio");
    }

    #[test]
    fn repeated_show_is_stable() {
        let mut set = default_set();
        let first = set.show("intro");
        let second = set.show("intro");
        assert_eq!(first, second);
        assert_eq!(set.current(), "intro");
    }

    #[test]
    fn generic_announcement_for_unlabelled_section() {
        let specs = [SectionSpec::new("work", "work-section")];
        let mut set = SectionSet::new(&specs, "work");
        assert_eq!(
            set.show("work").announcement.as_deref(),
            Some("Showing work section")
        );
    }

    #[test]
    fn key_routing() {
        assert_eq!(NavKey::from_key("Enter"), Some(NavKey::Activate));
        assert_eq!(NavKey::from_key(" "), Some(NavKey::Activate));
        assert_eq!(NavKey::from_key("Escape"), Some(NavKey::Home));
        assert_eq!(NavKey::from_key("Tab"), None);
        assert_eq!(NavKey::from_key("enter"), None);
    }
}
