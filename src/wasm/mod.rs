use wasm_bindgen::prelude::*;

use crate::config::PageConfig;

mod background;
mod frame;
mod images;
mod sections;

pub use background::BackgroundRenderer;
pub use images::ImageFallbacks;
pub use sections::SectionController;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

fn document() -> Result<web_sys::Document, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    Ok(window.document().ok_or("no document")?)
}

/// Page lifecycle owner. The host page constructs one instance after the DOM
/// is ready and keeps it for as long as the page lives.
#[wasm_bindgen]
pub struct Portfolio {
    config: PageConfig,
    sections: Option<SectionController>,
    images: Option<ImageFallbacks>,
    background: BackgroundRenderer,
}

#[wasm_bindgen]
impl Portfolio {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Portfolio {
        Portfolio::with_config(PageConfig::default())
    }

    /// Bind navigation and image fallbacks, then start the background. A
    /// background that fails to start is logged and leaves navigation working.
    pub fn init(&mut self) -> Result<(), JsValue> {
        let document = document()?;
        if self.sections.is_none() {
            self.sections = Some(SectionController::attach(&document, &self.config));
        }
        if self.images.is_none() {
            self.images = Some(ImageFallbacks::attach(&document, &self.config)?);
        }
        if let Err(err) = self.background.init() {
            log::error!("background init failed: {:?}", err);
        }
        log::info!("portfolio initialised");
        Ok(())
    }

    /// Stop the animation and detach every listener. Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.background.destroy();
        self.images = None;
        self.sections = None;
    }

    #[wasm_bindgen(js_name = showSection)]
    pub fn show_section(&self, name: &str) {
        if let Some(sections) = &self.sections {
            sections.show_section(name);
        }
    }

    #[wasm_bindgen(js_name = currentSection)]
    pub fn current_section(&self) -> Option<String> {
        self.sections.as_ref().map(SectionController::current_section)
    }
}

impl Portfolio {
    pub fn with_config(config: PageConfig) -> Portfolio {
        Portfolio {
            config,
            sections: None,
            images: None,
            background: BackgroundRenderer::new(),
        }
    }

    pub fn background(&self) -> &BackgroundRenderer {
        &self.background
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}
