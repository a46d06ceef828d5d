// ABOUTME: Loads the HTML document to export from a file, stdin, or an HTTP(S) URL.
// ABOUTME: Decodes bytes using the Content-Type charset when given, otherwise chardetng detection.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

use crate::error::{ExportError, Result};

/// Decode a page body. A usable `charset` parameter in `content_type` wins;
/// without one the encoding is guessed from the bytes. A leading BOM always
/// decides the encoding and is dropped from the result.
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or_else(|| sniff_encoding(body));
    let (text, used, had_errors) = encoding.decode(body);
    if had_errors {
        debug!(encoding = used.name(), "page contained malformed sequences");
    }
    text.into_owned()
}

fn sniff_encoding(body: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(body, true);
    detector.guess(None, true)
}

/// The `charset` parameter of a Content-Type value, unquoted.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("charset"))
        .map(|(_, value)| value.trim().trim_matches(|c: char| c == '"' || c == '\''))
        .filter(|value| !value.is_empty())
}

fn is_url(target: &str) -> bool {
    target.starts_with("http://") || target.starts_with("https://")
}

/// Fetch a page with a blocking client. Non-2xx responses are errors.
pub fn fetch(url: &str) -> Result<String> {
    let parsed = url::Url::parse(url).map_err(|e| {
        ExportError::source_failed(url, "invalid URL").with_source(e.into())
    })?;

    let resp = reqwest::blocking::get(parsed.as_str())
        .and_then(|r| r.error_for_status())
        .map_err(|e| ExportError::source_failed(url, "request failed").with_source(e.into()))?;

    let content_type = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp
        .bytes()
        .map_err(|e| ExportError::source_failed(url, "cannot read body").with_source(e.into()))?;

    debug!(url, bytes = body.len(), "fetched document");
    Ok(decode_html(&body, content_type.as_deref()))
}

/// Load the document named by `target`: `-` for stdin, an http(s) URL, or a file path.
pub fn load(target: &str) -> Result<String> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(|e| {
            ExportError::source_failed("stdin", "cannot read").with_source(e.into())
        })?;
        return Ok(decode_html(&buf, None));
    }

    if is_url(target) {
        return fetch(target);
    }

    let path = Path::new(target);
    if !path.exists() {
        return Err(ExportError::source_failed(target, "file not found"));
    }
    let bytes = fs::read(path)
        .map_err(|e| ExportError::source_failed(target, "cannot read").with_source(e.into()))?;
    Ok(decode_html(&bytes, None))
}
