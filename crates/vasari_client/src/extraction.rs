//! Recovery of JSON from free-form model responses.
//!
//! Model responses routinely wrap the requested JSON in markdown code
//! fences or surround it with explanatory prose. Extraction here is
//! best-effort by contract: a `None` never escalates, because the caller
//! substitutes a deterministic fallback instead.

/// Extract the JSON payload from a response that may contain markdown
/// fences or surrounding prose.
///
/// Strategies, in order:
/// 1. ```` ```json ```` (or bare ```` ``` ````) code blocks
/// 2. the first balanced `{...}` or `[...]`, whichever opens earlier
///
/// # Examples
///
/// ```
/// use vasari_client::extract_json;
///
/// let response = "Here you go:\n```json\n{\"ok\": true}\n```\nHope that helps!";
/// assert_eq!(extract_json(response).unwrap(), "{\"ok\": true}");
/// ```
pub fn extract_json(response: &str) -> Option<String> {
    if let Some(fenced) = from_code_block(response) {
        // A fence may itself contain prose around the JSON; re-trim inside.
        if let Some(inner) = first_balanced(&fenced) {
            return Some(inner);
        }
        return Some(fenced);
    }
    first_balanced(response)
}

/// Content of the first markdown code block, language tag stripped.
fn from_code_block(response: &str) -> Option<String> {
    let start = response.find("```")?;
    let after_fence = &response[start + 3..];
    // Skip an optional language tag up to the first newline.
    let body_start = after_fence.find('\n').map(|n| n + 1).unwrap_or(0);
    let body = &after_fence[body_start..];
    match body.find("```") {
        Some(end) => Some(body[..end].trim().to_string()),
        // No closing fence: likely a truncated response, take the rest.
        None => Some(body.trim().to_string()),
    }
}

/// The earliest balanced `{...}` or `[...]` span in the response.
fn first_balanced(response: &str) -> Option<String> {
    let brace = response.find('{');
    let bracket = response.find('[');
    match (brace, bracket) {
        (Some(b), Some(k)) if k < b => balanced_span(response, '[', ']')
            .or_else(|| balanced_span(response, '{', '}')),
        (_, Some(_)) if brace.is_none() => balanced_span(response, '[', ']'),
        (Some(_), _) => balanced_span(response, '{', '}')
            .or_else(|| balanced_span(response, '[', ']')),
        _ => None,
    }
}

/// Span from the first `open` to its matching `close`, respecting nesting
/// and JSON string literals.
fn balanced_span(response: &str, open: char, close: char) -> Option<String> {
    let start = response.find(open)?;
    let mut depth = 0;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in response[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(response[start..start + i + close.len_utf8()].to_string());
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_from_json_code_block() {
        let response = "Sure, here's the data:\n\n```json\n{\n  \"id\": 123\n}\n```\n\nEnjoy!";
        let json = extract_json(response).unwrap();
        assert!(json.contains("\"id\": 123"));
        assert!(json.starts_with('{'));
    }

    #[test]
    fn extracts_from_untagged_code_block() {
        let response = "```\n[1, 2, 3]\n```";
        assert_eq!(extract_json(response).unwrap(), "[1, 2, 3]");
    }

    #[test]
    fn trims_leading_and_trailing_prose() {
        let response = "The result is {\"nested\": {\"value\": 7}} as requested.";
        let json = extract_json(response).unwrap();
        assert_eq!(json, "{\"nested\": {\"value\": 7}}");
    }

    #[test]
    fn prefers_array_when_it_opens_first() {
        let response = "[{\"a\": 1}, {\"a\": 2}] trailing";
        let json = extract_json(response).unwrap();
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }

    #[test]
    fn handles_escaped_quotes_in_strings() {
        let response = r#"{"text": "She said \"hello\" {not a brace}"}"#;
        let json = extract_json(response).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&json).is_ok());
    }

    #[test]
    fn truncated_fence_returns_remainder() {
        let response = "```json\n{\"partial\": true}";
        assert_eq!(extract_json(response).unwrap(), "{\"partial\": true}");
    }

    #[test]
    fn plain_prose_yields_none() {
        assert!(extract_json("no structured data here").is_none());
    }
}
