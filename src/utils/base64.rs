use base64::{engine::general_purpose, Engine as _};

/// Decodes a Base64 string to its original form.
///
/// # Returns
/// The decoded string, or an empty string if the input is invalid.
/// Byte sequences that are not valid UTF-8 are replaced rather than
/// surfaced as an error.
pub fn base64_decode(input: &str) -> String {
    match general_purpose::STANDARD.decode(input) {
        Ok(decoded) => String::from_utf8_lossy(&decoded).to_string(),
        Err(_) => String::new(),
    }
}

/// Reverses a URL-safe Base64 string to standard Base64 format.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Decodes a Base64 string whose padding may have been stripped.
///
/// Accepts both the standard and the URL-safe alphabet and ignores
/// embedded whitespace. Missing `=` padding is restored before decoding
/// (pad length `(4 - len % 4) % 4`).
pub fn url_safe_base64_decode_padded(input: &str) -> String {
    let mut s: String = url_safe_base64_reverse(input)
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let padding = (4 - s.len() % 4) % 4;
    for _ in 0..padding {
        s.push('=');
    }

    base64_decode(&s)
}
