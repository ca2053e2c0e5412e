use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent};

use crate::config::PageConfig;
use crate::sections::{NavKey, SectionSet, FOCUS_TARGETS};

struct Inner {
    sections: RefCell<SectionSet>,
    /// Section containers, indexed like `sections`.
    elements: Vec<Element>,
    announcer: Option<Element>,
    hidden_class: String,
}

impl Inner {
    fn show(&self, name: &str) {
        let transition = self.sections.borrow_mut().show(name);

        for element in &self.elements {
            set_hidden(element, &self.hidden_class, true);
        }
        let Some(index) = transition.visible else {
            log::debug!("no section named {name:?}");
            return;
        };
        let target = &self.elements[index];
        set_hidden(target, &self.hidden_class, false);
        if let Some(text) = &transition.announcement {
            self.announce(text);
        }
        focus_first(target);
    }

    fn announce(&self, text: &str) {
        if let Some(announcer) = &self.announcer {
            announcer.set_text_content(Some(text));
        }
    }
}

fn set_hidden(element: &Element, class: &str, hidden: bool) {
    let classes = element.class_list();
    let toggled = if hidden {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(err) = toggled {
        log::warn!("failed to toggle {class:?} on #{}: {:?}", element.id(), err);
    }
    let aria = if hidden { "true" } else { "false" };
    if let Err(err) = element.set_attribute("aria-hidden", aria) {
        log::warn!("failed to set aria-hidden on #{}: {:?}", element.id(), err);
    }
}

fn focus_first(section: &Element) {
    let target = section
        .query_selector(FOCUS_TARGETS)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(target) = target {
        if let Err(err) = target.focus() {
            log::warn!("focus failed: {:?}", err);
        }
    }
}

/// Shows one section at a time and keeps assistive technology informed.
///
/// Sections, controls and the live region are looked up once by id; any that
/// are missing are skipped. Dropping the controller removes its listeners.
pub struct SectionController {
    inner: Rc<Inner>,
    listeners: Vec<EventListener>,
}

impl SectionController {
    /// Look up the page elements without binding any listeners.
    pub fn new(document: &Document, config: &PageConfig) -> Self {
        let present: Vec<_> = config
            .sections
            .iter()
            .filter_map(|spec| {
                let element = document.get_element_by_id(&spec.element_id);
                if element.is_none() {
                    log::debug!("section #{} not found", spec.element_id);
                }
                element.map(|el| (spec, el))
            })
            .collect();

        let sections = SectionSet::new(present.iter().map(|(spec, _)| *spec), &config.home_section);
        let elements = present.into_iter().map(|(_, el)| el).collect();

        Self {
            inner: Rc::new(Inner {
                sections: RefCell::new(sections),
                elements,
                announcer: document.get_element_by_id(&config.announcer_id),
                hidden_class: config.hidden_class.clone(),
            }),
            listeners: Vec::new(),
        }
    }

    /// Look up elements, bind navigation and announce that the page loaded.
    pub fn attach(document: &Document, config: &PageConfig) -> Self {
        let mut controller = Self::new(document, config);
        controller.bind(document, config);
        controller.announce(&config.load_message);
        controller
    }

    /// Wire the navigation controls and the document-wide Escape key.
    pub fn bind(&mut self, document: &Document, config: &PageConfig) {
        for control in &config.controls {
            let Some(element) = document.get_element_by_id(&control.element_id) else {
                log::debug!("nav control #{} not found", control.element_id);
                continue;
            };

            let inner = self.inner.clone();
            let section = control.section.clone();
            self.listeners.push(EventListener::new(&element, "click", move |_| {
                inner.show(&section);
            }));

            let inner = self.inner.clone();
            let section = control.section.clone();
            self.listeners.push(EventListener::new_with_options(
                &element,
                "keydown",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if NavKey::from_key(&event.key()) == Some(NavKey::Activate) {
                        event.prevent_default();
                        inner.show(&section);
                    }
                },
            ));
        }

        let inner = self.inner.clone();
        let home = config.home_section.clone();
        self.listeners.push(EventListener::new(document, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if NavKey::from_key(&event.key()) == Some(NavKey::Home) {
                inner.show(&home);
            }
        }));
    }

    pub fn show_section(&self, name: &str) {
        self.inner.show(name);
    }

    pub fn current_section(&self) -> String {
        self.inner.sections.borrow().current().to_owned()
    }

    /// Write `text` to the live region, if the page has one.
    pub fn announce(&self, text: &str) {
        self.inner.announce(text);
    }
}
