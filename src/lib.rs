//! Image gallery widget compiled to WebAssembly.
//!
//! Thumbnails open a shared modal, items fade in as they scroll into view, and
//! an optional canvas behind the page draws drifting particles. The state
//! models below are target independent; DOM bindings only exist on wasm32.

pub mod config;
pub mod error;
pub mod modal;
pub mod particles;
pub mod reveal;

pub use config::GalleryConfig;
pub use error::GalleryError;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod app;
    mod dom;
    mod gallery;
    mod render;
    mod reveal;

    pub use app::{boot, load_config, App};
    pub use gallery::Gallery;
    pub use render::ParticleLayer;
    pub use reveal::RevealTrigger;

    #[wasm_bindgen(start)]
    pub fn main() {
        console_error_panic_hook::set_once();
        app::start();
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{boot, load_config, App, Gallery, ParticleLayer, RevealTrigger};
