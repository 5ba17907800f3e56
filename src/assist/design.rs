use std::sync::Arc;

use serde_json::json;

use crate::{
    assist::client::{GenerateRequest, GenerativeClient},
    content::fonts::font_names_for_prompt,
    content::model::Family,
    foundation::error::{StudioError, StudioResult},
    template::registry::templates_for_prompt,
};

/// Content, template and font recommended for a brief.
///
/// `template` and `font_keyword` are free text; the controller resolves them against the
/// registry and the font catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AiDesign {
    pub headline: String,
    pub title: String,
    pub subtitle: String,
    pub promotion: String,
    #[serde(default)]
    pub price: Option<String>,
    pub template: String,
    #[serde(rename = "fontKeyword")]
    pub font_keyword: String,
}

/// Turns a free-text brief into an [`AiDesign`] through schema-constrained JSON generation.
#[derive(Clone)]
pub struct DesignAssistant {
    client: Arc<dyn GenerativeClient>,
    model: String,
}

impl DesignAssistant {
    pub fn new(client: Arc<dyn GenerativeClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Ask for a design. Every failure is logged and reported as `None`.
    pub async fn design(&self, family: Family, brief: &str) -> Option<AiDesign> {
        let request =
            GenerateRequest::json(&self.model, design_prompt(family, brief), design_schema(family));
        let text = match self.client.generate(request).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "design request failed");
                return None;
            }
        };
        match parse_design(&text) {
            Ok(design) => Some(design),
            Err(e) => {
                tracing::error!(error = %e, "failed to parse design response");
                None
            }
        }
    }
}

/// Parse the model's JSON answer. A blank price counts as no price.
pub fn parse_design(text: &str) -> StudioResult<AiDesign> {
    let mut design: AiDesign = serde_json::from_str(text.trim())
        .map_err(|e| StudioError::serde(format!("design response is not valid JSON: {e}")))?;
    if design.price.as_deref().is_some_and(|p| p.trim().is_empty()) {
        design.price = None;
    }
    Ok(design)
}

pub fn design_prompt(family: Family, brief: &str) -> String {
    let (role, goal) = match family {
        Family::Review => (
            "You are a specialist in aesthetic clinic before/after review posts.",
            "User is preparing a review post for",
        ),
        Family::Live => (
            "You are a specialist in Facebook Live commerce design.",
            "User is planning a live stream for",
        ),
    };
    format!(
        "{role}\n\
         {goal}: \"{brief}\".\n\
         \n\
         Recommend high-impact sales text in Thai.\n\
         Available Templates:\n\
         {templates}\n\
         \n\
         Available Fonts: {fonts}.\n\
         \n\
         Output the recommendation strictly in JSON format.",
        templates = templates_for_prompt(family),
        fonts = font_names_for_prompt(),
    )
}

/// Response schema in Gemini's OpenAPI subset.
pub fn design_schema(family: Family) -> serde_json::Value {
    let ids = crate::template::registry::TemplateId::all(family)
        .into_iter()
        .map(|t| t.id())
        .collect::<Vec<_>>()
        .join(", ");
    json!({
        "type": "OBJECT",
        "properties": {
            "headline": { "type": "STRING", "description": "Hook text like 'นาทีทอง!'" },
            "title": { "type": "STRING", "description": "Main service like 'Filler 1 แถม 1'" },
            "subtitle": { "type": "STRING", "description": "Limited time offer like 'เฉพาะในไลฟ์เท่านั้น'" },
            "promotion": { "type": "STRING", "description": "Main selling points, one per line" },
            "price": { "type": "STRING", "description": "Price tag like 'เพียง 9,900.-'" },
            "template": { "type": "STRING", "description": format!("One of: {ids}") },
            "fontKeyword": { "type": "STRING", "description": "The name of one of the fonts mentioned" }
        },
        "required": ["headline", "title", "subtitle", "promotion", "template", "fontKeyword"]
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assist/design.rs"]
mod tests;
