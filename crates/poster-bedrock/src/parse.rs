use poster_core::models::document::TextField;
use poster_core::models::generation::GeneratedContent;

use crate::error::GenerationError;

/// Fields every response must carry.
pub const REQUIRED_FIELDS: [TextField; 6] = [
    TextField::Title,
    TextField::Abstract,
    TextField::Introduction,
    TextField::Methods,
    TextField::Results,
    TextField::Conclusions,
];

/// The JSON payload of a model reply, without Markdown code fences or
/// surrounding prose.
pub fn extract_json(text: &str) -> &str {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        // Skip an optional language tag on the opening fence line.
        let body = match after.find('\n') {
            Some(nl) if after[..nl].trim().chars().all(|c| c.is_ascii_alphanumeric()) => {
                &after[nl + 1..]
            }
            _ => after,
        };
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
    }

    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    }
}

/// Parse a model reply into generated content and check required fields.
pub fn parse_generated(text: &str) -> Result<GeneratedContent, GenerationError> {
    let json = extract_json(text);
    if json.is_empty() {
        return Err(GenerationError::ResponseParse("empty response".to_string()));
    }

    let content: GeneratedContent = serde_json::from_str(json).map_err(|e| {
        GenerationError::SchemaViolation(format!(
            "failed to parse generated content: {e}. Response: {text}"
        ))
    })?;

    let missing = content.missing(&REQUIRED_FIELDS);
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(TextField::key).collect();
        return Err(GenerationError::SchemaViolation(format!(
            "missing required fields: {}",
            names.join(", ")
        )));
    }

    Ok(content)
}
