use std::sync::Arc;

use crate::{
    assist::client::{GenerateRequest, GenerativeClient},
    content::model::Family,
    foundation::error::StudioResult,
};

/// Shown in place of a caption when the service answers with nothing.
pub const CAPTION_FALLBACK: &str = "ขออภัย ไม่สามารถสร้างแคปชั่นได้ในขณะนี้";

#[derive(Clone)]
pub struct CaptionAssistant {
    client: Arc<dyn GenerativeClient>,
    model: String,
}

impl CaptionAssistant {
    pub fn new(client: Arc<dyn GenerativeClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// Generate a social caption. Transport errors propagate; blank answers become
    /// [`CAPTION_FALLBACK`].
    pub async fn caption(
        &self,
        family: Family,
        treatment: &str,
        promotion: &str,
    ) -> StudioResult<String> {
        let request = GenerateRequest::text(&self.model, caption_prompt(family, treatment, promotion));
        let text = self.client.generate(request).await?;
        if text.trim().is_empty() {
            tracing::warn!("caption response was empty");
            return Ok(CAPTION_FALLBACK.to_string());
        }
        Ok(text)
    }
}

pub fn caption_prompt(family: Family, treatment: &str, promotion: &str) -> String {
    match family {
        Family::Live => format!(
            "Generate a high-energy Facebook Live description for 'Arte House Clinic'.\n\
             Focus on creating urgency (FOMO) for this treatment: {treatment}.\n\
             Promotion details: {promotion}.\n\
             Include call-to-actions like 'CF ใต้คอมเมนต์' or 'ทักแชทด่วน'.\n\
             Tone: Professional yet very engaging for live sales."
        ),
        Family::Review => format!(
            "Write a Facebook post caption in Thai for a before/after review from 'Arte House Clinic'.\n\
             Treatment result: {treatment}.\n\
             Highlights: {promotion}.\n\
             End with a call-to-action to book via phone or LINE.\n\
             Tone: Warm, trustworthy and premium."
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assist/caption.rs"]
mod tests;
