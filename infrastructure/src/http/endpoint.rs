//! URL construction for API paths.

use url::Url;

/// Parse and check a base URL.
///
/// The URL must be absolute and able to carry path segments
/// (`http://host[:port][/prefix]`).
pub fn parse_base_url(base: &str) -> Result<Url, String> {
    let url = Url::parse(base.trim()).map_err(|e| format!("{}: {}", base, e))?;
    if url.cannot_be_a_base() {
        return Err(format!("{}: not a base URL", base));
    }
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(format!("{}: unsupported scheme '{}'", base, other)),
    }
}

/// `base` with `segments` appended as percent-encoded path segments
pub fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
