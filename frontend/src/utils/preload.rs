use crate::error::FrontendError;
use futures::future::join_all;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Fetches and decodes a single image off-screen so a later `<img>` with the
/// same `src` is served from cache.
pub async fn load_image(src: &str) -> Result<(), FrontendError> {
    let image = HtmlImageElement::new().map_err(|e| FrontendError::image_load(src, &e))?;
    image.set_src(src);
    JsFuture::from(image.decode())
        .await
        .map(|_| ())
        .map_err(|e| FrontendError::image_load(src, &e))
}

/// Loads every source concurrently and waits for all of them to settle.
///
/// Results come back in input order. One failing image never cancels or
/// affects the others.
pub async fn preload_all(sources: &[&str]) -> Vec<Result<(), FrontendError>> {
    join_all(sources.iter().map(|src| load_image(src))).await
}
