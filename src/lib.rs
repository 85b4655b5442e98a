#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Animated single-page portfolio: a timed cloud splash followed by a
//! horizontally paginated parallax presentation.
//!
//! `engine` holds the state machines and builds everywhere; `web` binds them to
//! the DOM and only compiles for wasm32.

pub mod config;
pub mod engine;
pub mod error;

pub use config::PortfolioConfig;
pub use error::{Error, Result};

// Only compile wasm-specific code when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod web;

#[cfg(target_arch = "wasm32")]
mod entry {
    use wasm_bindgen::prelude::*;

    /// Id of the element the site mounts into.
    const ROOT_ID: &str = "app";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        // Test harness pages have no root; nothing to mount there.
        if document.get_element_by_id(ROOT_ID).is_none() {
            return Ok(());
        }
        super::web::mount(ROOT_ID)?;
        Ok(())
    }

    /// Remount the site into `root_id`.
    #[wasm_bindgen(js_name = mountPortfolio)]
    pub fn mount_portfolio(root_id: &str) -> Result<(), JsValue> {
        super::web::mount(root_id)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = unmountPortfolio)]
    pub fn unmount_portfolio() {
        super::web::unmount();
    }
}
