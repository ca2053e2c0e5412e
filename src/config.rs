//! Declarative binding between logical page concepts and the document.
//!
//! Everything the runtime looks up in the page (section containers, navigation
//! controls, the live region, image attributes) is named here, so components
//! never hard-code selectors and tests can point them at fixture elements.

use std::borrow::Cow;

/// One togglable block of page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: String,
    pub element_id: String,
    /// Text written to the live region when the section is revealed.
    pub announcement: Option<String>,
}

impl SectionSpec {
    pub fn new(name: impl Into<String>, element_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element_id: element_id.into(),
            announcement: None,
        }
    }

    pub fn with_announcement(mut self, text: impl Into<String>) -> Self {
        self.announcement = Some(text.into());
        self
    }

    /// Predefined announcement, or a generic one built from the name.
    pub fn announcement(&self) -> Cow<'_, str> {
        match &self.announcement {
            Some(text) => Cow::Borrowed(text),
            None => Cow::Owned(format!("Showing {} section", self.name)),
        }
    }
}

/// A control that reveals `section` on click, Enter or Space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControl {
    pub element_id: String,
    pub section: String,
}

impl NavControl {
    pub fn new(element_id: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            section: section.into(),
        }
    }
}

/// Special case for one externally hosted placeholder image.
///
/// Matching is a plain substring test on the image source; if the host ever
/// changes the rule silently stops applying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderRule {
    pub host: String,
    pub local: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    pub sections: Vec<SectionSpec>,
    pub controls: Vec<NavControl>,
    /// Section shown on Escape and assumed visible at startup.
    pub home_section: String,
    pub announcer_id: String,
    pub load_message: String,
    pub hidden_class: String,
    pub fallback_attr: String,
    pub fallback_alt: String,
    pub placeholder: PlaceholderRule,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sections: vec![
                SectionSpec::new("intro", "intro-section")
                    .with_announcement("Showing main introduction section"),
                SectionSpec::new("bio", "bio-section")
                    .with_announcement("Showing about me section"),
            ],
            controls: vec![
                NavControl::new("bio-nav-button", "bio"),
                NavControl::new("home-button", "intro"),
            ],
            home_section: "intro".into(),
            announcer_id: "screen-reader-announcer".into(),
            load_message:
                "Portfolio website loaded. Navigate using the menu or keyboard shortcuts.".into(),
            hidden_class: "hidden".into(),
            fallback_attr: "data-fallback".into(),
            fallback_alt: "Fallback image".into(),
            placeholder: PlaceholderRule {
                host: "placehold.co".into(),
                local: "flower.jpg".into(),
            },
        }
    }
}

impl PageConfig {
    pub fn section(&self, name: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Selector for images that opted into fallback handling.
    pub fn fallback_selector(&self) -> String {
        format!("img[{}]", self.fallback_attr)
    }

    pub fn placeholder_selector(&self) -> String {
        format!("img[src*=\"{}\"]", self.placeholder.host)
    }
}
