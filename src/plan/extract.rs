use serde_json::Value;
use tracing::debug;

/// Best-effort extraction of a JSON document from free-form model output.
///
/// Strategies, tried in order, first success wins:
/// 1. the contents of a ```json fenced block;
/// 2. the substring from the first `{` to the last `}` inclusive;
/// 3. the whole text.
///
/// A parse failure at one stage falls through to the next; `None` means
/// every strategy failed.
pub fn extract_json(text: &str) -> Option<Value> {
    if let Some(inner) = fenced_block(text) {
        if let Ok(value) = serde_json::from_str(inner) {
            return Some(value);
        }
        debug!("Fenced block did not parse, falling through");
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            if let Ok(value) = serde_json::from_str(&text[start..=end]) {
                return Some(value);
            }
            debug!("Brace-delimited span did not parse, falling through");
        }
    }

    serde_json::from_str(text).ok()
}

/// Returns the text between a ```json opening fence and the next closing
/// fence, if both are present.
fn fenced_block(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(&rest[..end])
}
