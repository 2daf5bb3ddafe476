//! URL encoding/decoding utilities

/// Decodes a URL-encoded string
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if decoding fails
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}
