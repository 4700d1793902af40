use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;
use std::sync::LazyLock;

/// Bytes scanned for a `<meta>` charset declaration
const META_PRESCAN_LEN: usize = 1024;

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#)
        .expect("meta charset pattern is valid")
});

/// Whether a `Content-Type` value names an HTML document
pub fn is_html_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim();
    essence.eq_ignore_ascii_case("text/html")
        || essence.eq_ignore_ascii_case("application/xhtml+xml")
}

/// Encoding named by the `charset` parameter of a `Content-Type` value
pub fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let label = value.trim().trim_matches(|c: char| c == '"' || c == '\'');
        Encoding::for_label(label.as_bytes())
    })
}

/// Encoding declared by a `<meta>` tag near the start of the document
pub fn charset_from_meta(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(META_PRESCAN_LEN)];
    let label = META_CHARSET.captures(head)?.get(1)?;
    Encoding::for_label(label.as_bytes())
}

/// Decodes a response body to text
///
/// A byte order mark wins, then the header charset, then a `<meta>`
/// declaration; UTF-8 otherwise. Malformed sequences become U+FFFD.
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_from_content_type)
        .or_else(|| charset_from_meta(body))
        .unwrap_or(UTF_8);
    ::log::debug!("Decoding body as {}", encoding.name());

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}
