use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::Document;

use super::dom;
use super::gallery::Gallery;
use super::render::ParticleLayer;
use super::reveal::RevealTrigger;
use crate::config::{GalleryConfig, CONFIG_ELEMENT_ID};
use crate::error::Result;

/// Everything the page runs, wired once at startup.
pub struct App {
    gallery: Gallery,
    reveal: RevealTrigger,
    particles: Option<ParticleLayer>,
}

impl App {
    /// Bind the gallery, start the reveal trigger and, if enabled, the
    /// particle background.
    ///
    /// Setup that can reject the config runs before any gallery listener is
    /// installed. A failing particle layer only disables the background.
    pub fn mount(document: &Document, config: &GalleryConfig) -> Result<Self> {
        let gallery = Gallery::new(document, &config.selectors)?;
        let reveal = RevealTrigger::start(gallery.items(), &config.reveal)
            .inspect_err(|err| log::error!("scroll reveal failed to start: {err}"))?;

        gallery
            .bind_events()
            .inspect_err(|err| log::error!("gallery event binding failed: {err}"))?;
        let preloads = gallery.preload_images();
        log::debug!("preloading {} images", preloads.len());

        let particles = if config.particles.enabled {
            dom::window()
                .and_then(|window| ParticleLayer::start(&window, document, &config.particles))
                .inspect_err(|err| log::warn!("particle background disabled: {err}"))
                .ok()
        } else {
            None
        };

        log::info!(
            "gallery mounted with {} items (particles {})",
            gallery.items().len(),
            if particles.is_some() { "on" } else { "off" }
        );
        Ok(Self {
            gallery,
            reveal,
            particles,
        })
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn reveal(&self) -> &RevealTrigger {
        &self.reveal
    }

    pub fn particles(&self) -> Option<&ParticleLayer> {
        self.particles.as_ref()
    }
}

/// Read the page's config block. No block means defaults.
pub fn load_config(document: &Document) -> Result<GalleryConfig> {
    match document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(text) => GalleryConfig::from_json(&text),
        None => Ok(GalleryConfig::default()),
    }
}

/// Mount once the document has been parsed.
pub(super) fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let loaded = load_config(&document);
    let level = loaded.as_ref().map_or(log::Level::Info, GalleryConfig::level);
    console_log::init_with_level(level).ok();
    // Listeners and the frame loop own what they need from here on.
    let _app = boot(&document, loaded);
}

/// Mount right away if the document is parsed, otherwise on
/// `DOMContentLoaded`. A rejected config is replaced by the defaults.
///
/// Returns the app only when it was mounted immediately.
pub fn boot(document: &Document, loaded: Result<GalleryConfig>) -> Option<App> {
    let config = loaded.unwrap_or_else(|err| {
        log::warn!("{err}; using default gallery config");
        GalleryConfig::default()
    });

    if document.ready_state() != "loading" {
        return run(document, &config);
    }

    let ready_document = document.clone();
    let on_ready = Closure::once(move || {
        run(&ready_document, &config);
    });
    let listening = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref());
    match listening {
        Ok(()) => on_ready.forget(),
        Err(err) => log::error!("cannot wait for DOMContentLoaded: {err:?}"),
    }
    None
}

fn run(document: &Document, config: &GalleryConfig) -> Option<App> {
    App::mount(document, config)
        .inspect_err(|err| log::error!("gallery init failed: {err}"))
        .ok()
}
