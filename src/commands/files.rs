//! File Commands
//!
//! Downloads through a temporary anchor and reads of user-picked files.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

/// Offer `text` as a download named `filename`
pub fn download_text(filename: &str, mime: &str, text: &str) -> Result<(), String> {
    let href = format!(
        "data:{};charset=utf-8,{}",
        mime,
        utf8_percent_encode(text, NON_ALPHANUMERIC)
    );
    download_data_url(filename, &href)
}

/// Offer an existing data URL (e.g. a canvas PNG) as a download
pub fn download_data_url(filename: &str, href: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.set_attribute("style", "display: none").map_err(|e| format!("{:?}", e))?;

    let body = document.body().ok_or_else(|| "no document body".to_string())?;
    body.append_child(&anchor).map_err(|e| format!("{:?}", e))?;
    anchor.click();
    anchor.remove();
    web_sys::console::log_1(&format!("[FILES] Download offered: {}", filename).into());
    Ok(())
}

/// Whole file contents as UTF-8 text
pub async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let value = JsFuture::from(file.text()).await.map_err(|e| format!("{:?}", e))?;
    value
        .as_string()
        .ok_or_else(|| format!("{} did not read as text", file.name()))
}
