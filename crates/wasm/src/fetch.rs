//! Loading the tag index via the Fetch API.

use docnav_tags::TagError;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn fetch_error(path: &str, message: impl Into<String>) -> TagError {
    TagError::Fetch {
        path: path.to_string(),
        message: message.into(),
    }
}

/// Fetch a text document from a URL (relative URLs resolve against the page).
pub async fn fetch_text(url: &str) -> Result<String, TagError> {
    let window = web_sys::window().ok_or_else(|| fetch_error(url, "No window object available"))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::Cors);

    let request = web_sys::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| fetch_error(url, format!("Failed to create request: {:?}", e)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| fetch_error(url, format!("Fetch failed: {:?}", e)))?;

    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| fetch_error(url, "Failed to convert response"))?;

    if !response.ok() {
        return Err(fetch_error(
            url,
            format!("HTTP error: {} {}", response.status(), response.status_text()),
        ));
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| fetch_error(url, format!("Failed to read body: {:?}", e)))?,
    )
    .await
    .map_err(|e| fetch_error(url, format!("Failed to read response body: {:?}", e)))?;

    text.as_string()
        .ok_or_else(|| fetch_error(url, "Response body is not text"))
}
