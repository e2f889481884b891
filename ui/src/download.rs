//! Saving generated files on both targets.

/// Save a generated file by triggering a browser download through a
/// temporary data-URL anchor.
#[cfg(target_arch = "wasm32")]
pub fn save_file(filename: &str, mime: &str, contents: &[u8]) -> std::io::Result<()> {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use wasm_bindgen::JsCast;

    fn missing(what: &str) -> std::io::Error {
        std::io::Error::other(format!("browser download unavailable: {what}"))
    }

    let window = web_sys::window().ok_or_else(|| missing("no window"))?;
    let document = window.document().ok_or_else(|| missing("no document"))?;
    let body = document.body().ok_or_else(|| missing("no body"))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| missing("could not create anchor"))?
        .dyn_into()
        .map_err(|_| missing("element is not an anchor"))?;

    anchor.set_href(&format!("data:{};base64,{}", mime, STANDARD.encode(contents)));
    anchor.set_download(filename);
    body.append_child(&anchor)
        .map_err(|_| missing("could not attach anchor"))?;
    anchor.click();
    anchor.remove();
    Ok(())
}

/// Save a generated file into the user's download directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn save_file(filename: &str, _mime: &str, contents: &[u8]) -> std::io::Result<()> {
    let dir = dirs::download_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
    let path = dir.join(filename);
    std::fs::write(&path, contents)?;
    tracing::info!("saved {}", path.display());
    Ok(())
}
