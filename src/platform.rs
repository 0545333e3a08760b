// src/platform.rs
//! Browser calls: clipboard, new tab, embedded config.
use gloo::console;
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

use crate::config::ConverterConfig;
use crate::error::ConverterError;

const CONFIG_ELEMENT_ID: &str = "converter-config";

pub async fn copy_to_clipboard(text: String) -> Result<(), ConverterError> {
    let Some(win) = window() else {
        console::error!("clipboard: no window");
        return Err(ConverterError::ClipboardFailure);
    };
    let cb = win.navigator().clipboard();
    JsFuture::from(cb.write_text(&text)).await.map_err(|e| {
        console::warn!("clipboard write rejected", e);
        ConverterError::ClipboardFailure
    })?;
    Ok(())
}

/// Fire-and-forget `window.open(url, "_blank")`.
pub fn open_in_new_tab(url: &str) {
    let Some(win) = window() else {
        console::error!("open: no window");
        return;
    };
    if let Err(e) = win.open_with_url_and_target(url, "_blank") {
        console::warn!(format!("window.open failed for {url}"), e);
    }
}

fn embedded_config_json() -> Option<String> {
    let doc = window()?.document()?;
    let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
    el.text_content()
}

pub fn load_config() -> ConverterConfig {
    let Some(json) = embedded_config_json() else {
        console::log!("config: no embedded block, using defaults");
        return ConverterConfig::default();
    };
    if json.trim().is_empty() {
        return ConverterConfig::default();
    }
    match ConverterConfig::from_json(&json) {
        Ok(cfg) => {
            console::log!(format!("config: loaded (copied_reset_ms={})", cfg.copied_reset_ms));
            cfg
        }
        Err(e) => {
            console::warn!(format!("config: parse error, using defaults: {e}"));
            ConverterConfig::default()
        }
    }
}
