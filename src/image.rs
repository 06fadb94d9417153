use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

const IMAGE_PROVIDER_BASE: &str = "https://image.pollinations.ai/prompt/";
const PROMPT_SUFFIX: &str = " fitness gym realistic lighting";

/// Characters escaped by JavaScript's `encodeURIComponent`: everything
/// except alphanumerics and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the image-provider URL for a prompt. The styling suffix is
/// appended before encoding; no request is made to the provider here.
pub fn build_image_url(prompt: &str) -> String {
    let full_prompt = format!("{}{}", prompt, PROMPT_SUFFIX);
    let encoded = utf8_percent_encode(&full_prompt, URI_COMPONENT);
    format!("{}{}", IMAGE_PROVIDER_BASE, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_url_contains_encoded_prompt_and_suffix() {
        let url = build_image_url("beginner strength");
        assert!(url.starts_with("https://image.pollinations.ai/prompt/"));
        assert!(url.contains("beginner%20strength%20fitness%20gym"));
    }

    #[test]
    fn test_full_url() {
        assert_eq!(
            build_image_url("leg day"),
            "https://image.pollinations.ai/prompt/leg%20day%20fitness%20gym%20realistic%20lighting"
        );
    }

    #[test]
    fn test_unreserved_marks_are_not_encoded() {
        let url = build_image_url("squat! (heavy) ~90kg");
        assert!(url.contains("squat!%20(heavy)%20~90kg"));
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let url = build_image_url("a/b&c=d");
        assert!(url.contains("a%2Fb%26c%3Dd"));
    }
}
