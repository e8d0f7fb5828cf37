//! Image URL helpers: data URIs for generated images, deterministic
//! placeholders for everything else.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

const PLACEHOLDER_BASE: &str = "https://picsum.photos/seed";
const PLACEHOLDER_WIDTH: u32 = 800;
const PLACEHOLDER_HEIGHT: u32 = 600;

/// Encode an image payload as a self-contained data URI.
pub fn data_uri(mime_type: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, BASE64.encode(data))
}

/// Deterministic fallback image URL for a recipe title.
///
/// The URL-escaped title is the seed, so the same title always maps to the
/// same placeholder image.
pub fn placeholder_image_url(title: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        PLACEHOLDER_BASE,
        urlencoding::encode(title),
        PLACEHOLDER_WIDTH,
        PLACEHOLDER_HEIGHT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_carries_media_type() {
        let uri = data_uri("image/png", b"hi");
        assert_eq!(uri, "data:image/png;base64,aGk=");
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        assert_eq!(
            placeholder_image_url("Lemon Pasta"),
            placeholder_image_url("Lemon Pasta")
        );
    }

    #[test]
    fn test_placeholder_escapes_title() {
        let url = placeholder_image_url("Sopa de ajo & pan");
        assert_eq!(
            url,
            "https://picsum.photos/seed/Sopa%20de%20ajo%20%26%20pan/800/600"
        );
    }

    #[test]
    fn test_different_titles_different_placeholders() {
        assert_ne!(
            placeholder_image_url("Omelette"),
            placeholder_image_url("Frittata")
        );
    }
}
