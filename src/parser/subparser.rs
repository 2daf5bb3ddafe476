//! Subscription-level parsing: raw text in, deduplicated proxy records out.

use crate::models::VlessProxy;
use crate::parser::explodes::explode_vless;
use crate::utils::base64::url_safe_base64_decode_padded;

/// Recover link text from a subscription body.
///
/// Subscription endpoints commonly serve the whole link list as one
/// base64 blob, usually with the padding stripped. Anything that already
/// contains a scheme separator is passed through untouched, and a failed
/// decode silently falls back to the raw text.
pub fn decode_if_needed(raw: &str) -> String {
    if raw.contains("://") || raw.len() <= 10 {
        return raw.to_string();
    }

    let decoded = url_safe_base64_decode_padded(raw);
    if decoded.contains("://") {
        decoded
    } else {
        raw.to_string()
    }
}

/// Parse subscription content into an ordered list of Reality proxies.
///
/// Lines that are blank, comments or foreign schemes are skipped without
/// a report. Each accepted record gets a unique name by appending the
/// literal `_1` until no earlier record collides, so a triple collision
/// ends up as `name`, `name_1`, `name_1_1`.
pub fn parse_subscription(content: &str) -> Vec<VlessProxy> {
    let content = decode_if_needed(content.trim());

    let mut proxies: Vec<VlessProxy> = Vec::new();
    for line in content.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if !line.starts_with("vless://") {
            continue;
        }

        if let Some(mut proxy) = explode_vless(line) {
            while proxies.iter().any(|p| p.name == proxy.name) {
                proxy.name.push_str("_1");
            }
            proxies.push(proxy);
        }
    }

    proxies
}
