use serde::Serialize;
use tera::{Context, Tera};

use crate::error::GenerationError;

pub const SYSTEM_PROMPT: &str = "You are an expert academic mentor helping students create \
high-quality science fair posters with data visualizations. You reply with a single JSON \
object and nothing else.";

const USER_TEMPLATE_NAME: &str = "poster_request";

const USER_TEMPLATE: &str = r#"Generate content for a scientific science fair poster (ISEF style) based on the following topic or text.
Make the content academic, concise, and suitable for a {{ width_in }}x{{ height_in }} inch poster.

1. If the topic involves quantitative comparisons, generate a "resultsVisual" as a "bar" chart.
2. If it involves trends over time or variables, use a "line" chart.
3. If it involves proportions, use a "pie" chart.
4. Always generate a "methodsVisual" that is a simple SVG diagram (flowchart or setup schematic) of the methodology. The SVG must be valid XML, have viewBox="0 0 800 500", use only basic shapes and text, and use standard colors (black stroke, white or light gray fill).

Respond with a JSON object with these keys:
{% for field in fields %}- "{{ field.key }}" ({{ field.requirement }}): {{ field.description }}
{% endfor %}- "resultsVisual" (optional): {"type": "bar" | "line" | "pie", "title": string, "xAxisLabel": string, "yAxisLabel": string, "data": [{"label": string, "value": number}]}
- "methodsVisual" (optional): {"type": "generic-svg", "title": string, "svgContent": string}

Input topic or text:
"""
{{ notes }}
"""
"#;

#[derive(Serialize)]
struct FieldSpec {
    key: &'static str,
    requirement: &'static str,
    description: &'static str,
}

const fn required(key: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        requirement: "required",
        description,
    }
}

const fn optional(key: &'static str, description: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        requirement: "optional",
        description,
    }
}

const FIELDS: [FieldSpec; 10] = [
    required("title", "the poster title"),
    optional("authors", "comma separated list of placeholder authors if none are given"),
    optional("affiliation", "school or institution"),
    required("abstract", "one paragraph summary"),
    required("introduction", "background and significance"),
    required("methods", "experimental setup, materials and procedure"),
    required("results", "key findings"),
    optional("discussion", "interpretation, limitations and future work"),
    required("conclusions", "main takeaways"),
    optional("references", "numbered list of references, one per line"),
];

/// Render the user message for `notes`.
pub fn render_user_prompt(notes: &str) -> Result<String, GenerationError> {
    let mut tera = Tera::default();
    tera.add_raw_template(USER_TEMPLATE_NAME, USER_TEMPLATE)?;

    let mut context = Context::new();
    context.insert("notes", notes.trim());
    context.insert("fields", &FIELDS);
    context.insert("width_in", &48);
    context.insert("height_in", &36);

    Ok(tera.render(USER_TEMPLATE_NAME, &context)?)
}
