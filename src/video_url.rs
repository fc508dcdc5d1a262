use url::Url;

// @module: Video identifier extraction from user-supplied URLs

// @const: Canonical long-form video host
pub const WATCH_HOST: &str = "www.youtube.com";

// @const: Short-link host
pub const SHORT_LINK_HOST: &str = "youtu.be";

/// Extract the video identifier from a user-supplied URL string.
///
/// Two URL shapes are recognized: the long-form watch URL, where the
/// identifier is the `v` query parameter, and the short-link form, where the
/// identifier is the path with surrounding slashes stripped. Any other host,
/// a missing or empty identifier, and unparseable input all yield `None`.
///
/// No network access happens here; whether the identifier names an existing
/// video is only discovered by the provider call.
pub fn extract_video_id(input: &str) -> Option<String> {
    let parsed = Url::parse(input).ok()?;
    let host = parsed.host_str()?;

    if host == WATCH_HOST {
        return parsed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty());
    }

    if host == SHORT_LINK_HOST {
        let id = parsed.path().trim_matches('/');
        if !id.is_empty() {
            return Some(id.to_string());
        }
    }

    None
}
