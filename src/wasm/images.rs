use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement};

use crate::config::{PageConfig, PlaceholderRule};
use crate::fallback::{fallback_source, placeholder_source};

/// `error` listeners that swap broken images for their fallbacks.
pub struct ImageFallbacks {
    listeners: Vec<EventListener>,
}

impl ImageFallbacks {
    pub fn attach(document: &Document, config: &PageConfig) -> Result<Self, JsValue> {
        let mut listeners = Vec::new();

        let images = document.query_selector_all(&config.fallback_selector())?;
        for i in 0..images.length() {
            let Some(img) = images
                .get(i)
                .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
            else {
                continue;
            };
            listeners.push(fallback_listener(img, config));
        }

        if let Some(img) = document
            .query_selector(&config.placeholder_selector())?
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            listeners.push(placeholder_listener(img, config.placeholder.clone()));
        }

        Ok(Self { listeners })
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

fn fallback_listener(img: HtmlImageElement, config: &PageConfig) -> EventListener {
    let attr = config.fallback_attr.clone();
    let alt = config.fallback_alt.clone();
    let target = img.clone();
    EventListener::new(&target, "error", move |_| {
        // Compare the raw attribute; `src()` is resolved to an absolute URL and
        // would never equal a relative fallback.
        let current = img.get_attribute("src").unwrap_or_default();
        let fallback = img.get_attribute(&attr);
        if let Some(next) = fallback_source(&current, fallback.as_deref()) {
            log::info!("image {current:?} failed, using fallback {next:?}");
            img.set_src(next);
            img.set_alt(&alt);
        }
    })
}

fn placeholder_listener(img: HtmlImageElement, rule: PlaceholderRule) -> EventListener {
    let target = img.clone();
    EventListener::new(&target, "error", move |_| {
        if let Some(local) = placeholder_source(&img.src(), &rule) {
            log::info!("placeholder image failed, using {local:?}");
            img.set_src(local);
        }
    })
}
