use std::time::Duration;

use crate::{
    assets::decode::decode_image,
    assets::payload::ImagePayload,
    assist::caption::CaptionAssistant,
    assist::design::{AiDesign, DesignAssistant},
    content::fonts::{FontOption, match_font_keyword},
    content::model::{ContentModel, Family, ImageSlot, TextField},
    editor::config::StudioConfig,
    export::png::{ExportClock, export_filename, render_png},
    export::sink::ExportSink,
    foundation::error::{StudioError, StudioResult},
    render::RenderBackend,
    scene::model::Scene,
    template::registry::TemplateId,
};

/// Shown to the user when an AI design is requested without a brief.
pub const BLANK_BRIEF_MESSAGE: &str = "กรุณาระบุความต้องการเพื่อให้ AI ช่วยออกแบบ";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum TaskKind {
    Caption,
    Design,
    Upload(ImageSlot),
}

/// Proof that a request was started; only the latest ticket of a kind may complete it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    kind: TaskKind,
    generation: u64,
}

#[derive(Clone, Copy, Debug, Default)]
struct TaskSlot {
    generation: u64,
    busy: bool,
}

impl TaskSlot {
    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.busy = true;
        self.generation
    }

    /// Clears the busy flag if `generation` is current; stale generations change nothing.
    fn finish(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.busy = false;
        true
    }
}

/// Inputs captured by [`EditorController::begin_caption`].
#[derive(Clone, Debug)]
pub struct CaptionJob {
    pub ticket: Ticket,
    pub family: Family,
    /// `headline + " " + title` at the time the request started.
    pub treatment: String,
    pub promotion: String,
}

impl CaptionJob {
    pub async fn run(&self, assistant: &CaptionAssistant) -> StudioResult<String> {
        assistant
            .caption(self.family, &self.treatment, &self.promotion)
            .await
    }
}

/// Inputs captured by [`EditorController::begin_design`].
#[derive(Clone, Debug)]
pub struct DesignJob {
    pub ticket: Ticket,
    pub family: Family,
    pub brief: String,
}

impl DesignJob {
    pub async fn run(&self, assistant: &DesignAssistant) -> Option<AiDesign> {
        assistant.design(self.family, &self.brief).await
    }
}

/// Owner of one editing session: content, template and font selection, and the lifecycle of
/// assistant requests and uploads.
///
/// All state changes go through these methods. Long-running work is split into `begin_*`, which
/// marks the request busy and hands out a [`Ticket`], and `complete_*`, which applies the result
/// only if that ticket is still the newest of its kind. The `async` helpers run both halves back
/// to back under the configured timeout.
pub struct EditorController {
    family: Family,
    config: StudioConfig,
    content: ContentModel,
    template: TemplateId,
    font: FontOption,
    caption_task: TaskSlot,
    design_task: TaskSlot,
    upload_tasks: [TaskSlot; 3],
    last_caption: Option<String>,
    clock: ExportClock,
}

impl EditorController {
    pub fn new(family: Family) -> Self {
        Self::with_config(family, StudioConfig::default())
    }

    pub fn with_config(family: Family, config: StudioConfig) -> Self {
        Self {
            family,
            config,
            content: ContentModel::seed(family),
            template: TemplateId::default_for(family),
            font: FontOption::default(),
            caption_task: TaskSlot::default(),
            design_task: TaskSlot::default(),
            upload_tasks: [TaskSlot::default(); 3],
            last_caption: None,
            clock: ExportClock::new(),
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn content(&self) -> &ContentModel {
        &self.content
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    pub fn font(&self) -> FontOption {
        self.font
    }

    pub fn last_caption(&self) -> Option<&str> {
        self.last_caption.as_deref()
    }

    pub fn is_caption_busy(&self) -> bool {
        self.caption_task.busy
    }

    pub fn is_design_busy(&self) -> bool {
        self.design_task.busy
    }

    pub fn is_upload_busy(&self, slot: ImageSlot) -> bool {
        self.upload_tasks[slot.index()].busy
    }

    /// What the preview shows right now.
    pub fn scene(&self) -> Scene {
        self.template.render(&self.content, self.font)
    }

    pub fn update_field(&mut self, field: TextField, value: impl Into<String>) {
        self.content.set_text(field, value);
    }

    pub fn select_template(&mut self, template: TemplateId) -> StudioResult<()> {
        if template.family() != self.family {
            return Err(StudioError::validation(format!(
                "template {template} does not belong to the {:?} editor",
                self.family
            )));
        }
        tracing::debug!(%template, "template selected");
        self.template = template;
        Ok(())
    }

    pub fn select_font(&mut self, font: FontOption) {
        self.font = font;
    }

    fn task_mut(&mut self, kind: TaskKind) -> &mut TaskSlot {
        match kind {
            TaskKind::Caption => &mut self.caption_task,
            TaskKind::Design => &mut self.design_task,
            TaskKind::Upload(slot) => &mut self.upload_tasks[slot.index()],
        }
    }

    fn begin(&mut self, kind: TaskKind) -> Ticket {
        let generation = self.task_mut(kind).begin();
        Ticket { kind, generation }
    }

    /// True if `ticket` is the newest of `kind`; clears that kind's busy flag.
    fn finish(&mut self, ticket: Ticket, kind: TaskKind) -> bool {
        if ticket.kind != kind {
            tracing::warn!(?ticket, ?kind, "ticket used for the wrong request kind");
            return false;
        }
        let current = self.task_mut(kind).finish(ticket.generation);
        if !current {
            tracing::warn!(?kind, generation = ticket.generation, "discarding stale result");
        }
        current
    }

    // Uploads

    pub fn begin_upload(&mut self, slot: ImageSlot) -> Ticket {
        self.begin(TaskKind::Upload(slot))
    }

    /// Apply an upload result. `None` means the upload failed; the slot keeps its image.
    pub fn complete_upload(&mut self, ticket: Ticket, payload: Option<ImagePayload>) -> bool {
        let TaskKind::Upload(slot) = ticket.kind else {
            tracing::warn!(?ticket, "non-upload ticket passed to complete_upload");
            return false;
        };
        if !self.finish(ticket, TaskKind::Upload(slot)) {
            return false;
        }
        match payload {
            Some(payload) => {
                tracing::debug!(slot = slot.name(), mime = payload.mime(), "image uploaded");
                self.content.set_image(slot, payload);
                true
            }
            None => false,
        }
    }

    /// Read `bytes` into `slot`. `None` (no file picked) does nothing, and bytes that do not
    /// decode as an image leave the slot as it was.
    ///
    /// Returns whether the slot was replaced.
    pub async fn upload_image(&mut self, slot: ImageSlot, bytes: Option<Vec<u8>>) -> bool {
        let Some(bytes) = bytes else {
            return false;
        };
        let ticket = self.begin_upload(slot);
        let read = move || -> StudioResult<ImagePayload> {
            decode_image(&bytes)?;
            ImagePayload::from_image_bytes(&bytes)
        };
        let payload = match tokio::task::spawn_blocking(read).await {
            Ok(Ok(payload)) => Some(payload),
            Ok(Err(e)) => {
                tracing::error!(slot = slot.name(), error = %e, "upload rejected");
                None
            }
            Err(e) => {
                tracing::error!(slot = slot.name(), error = %e, "upload worker failed");
                None
            }
        };
        self.complete_upload(ticket, payload)
    }

    // Caption

    pub fn begin_caption(&mut self) -> CaptionJob {
        CaptionJob {
            ticket: self.begin(TaskKind::Caption),
            family: self.family,
            treatment: format!("{} {}", self.content.headline, self.content.title),
            promotion: self.content.promotion.clone(),
        }
    }

    /// Apply a caption result; failures are logged. Returns the caption when it was accepted.
    pub fn complete_caption(
        &mut self,
        ticket: Ticket,
        result: StudioResult<String>,
    ) -> Option<String> {
        if !self.finish(ticket, TaskKind::Caption) {
            return None;
        }
        match result {
            Ok(caption) => {
                self.last_caption = Some(caption.clone());
                Some(caption)
            }
            Err(e) => {
                tracing::error!(error = %e, "caption request failed");
                None
            }
        }
    }

    pub async fn request_caption(&mut self, assistant: &CaptionAssistant) -> Option<String> {
        let job = self.begin_caption();
        let timeout = self.config.request_timeout();
        let result = with_timeout(timeout, job.run(assistant)).await;
        self.complete_caption(job.ticket, result)
    }

    // AI design

    /// Start a design request. A blank brief is refused before anything is marked busy.
    pub fn begin_design(&mut self, brief: &str) -> StudioResult<DesignJob> {
        if brief.trim().is_empty() {
            return Err(StudioError::validation(BLANK_BRIEF_MESSAGE));
        }
        Ok(DesignJob {
            ticket: self.begin(TaskKind::Design),
            family: self.family,
            brief: brief.to_string(),
        })
    }

    /// Apply a design result. Returns whether content was replaced.
    pub fn complete_design(&mut self, ticket: Ticket, design: Option<AiDesign>) -> bool {
        if !self.finish(ticket, TaskKind::Design) {
            return false;
        }
        let Some(design) = design else {
            tracing::warn!("no design to apply");
            return false;
        };
        self.apply_design(design);
        true
    }

    pub async fn request_ai_design(
        &mut self,
        assistant: &DesignAssistant,
        brief: &str,
    ) -> StudioResult<bool> {
        let job = self.begin_design(brief)?;
        let timeout = self.config.request_timeout();
        let design = match tokio::time::timeout(timeout, job.run(assistant)).await {
            Ok(design) => design,
            Err(_) => {
                tracing::error!(?timeout, "design request timed out");
                None
            }
        };
        Ok(self.complete_design(job.ticket, design))
    }

    fn apply_design(&mut self, design: AiDesign) {
        self.content.headline = design.headline;
        self.content.title = design.title;
        self.content.subtitle = design.subtitle;
        self.content.promotion = design.promotion;
        if self.family == Family::Live
            && let Some(price) = design.price
        {
            self.content.price = price;
        }

        match TemplateId::parse_in(self.family, &design.template) {
            Some(template) => self.template = template,
            None => tracing::warn!(
                template = %design.template,
                "recommended template is not available; keeping current selection"
            ),
        }
        self.font = match_font_keyword(&design.font_keyword);
        tracing::debug!(template = %self.template, font = self.font.name, "design applied");
    }

    // Export

    /// Render the current scene as PNG and hand it to `sink`.
    ///
    /// Returns the file name on success; failures are logged and leave the session untouched.
    pub fn export_image(
        &mut self,
        backend: &mut dyn RenderBackend,
        sink: &mut dyn ExportSink,
    ) -> Option<String> {
        let timestamp_ms = self.clock.tick();
        let file_name = export_filename(&self.config.brand_prefix, self.template, timestamp_ms);
        let result = render_png(backend, &self.scene())
            .and_then(|png| sink.deliver(&file_name, &png).map(|()| png.len()));
        match result {
            Ok(bytes) => {
                tracing::debug!(%file_name, bytes, "exported");
                Some(file_name)
            }
            Err(e) => {
                tracing::error!(%file_name, error = %e, "export failed");
                None
            }
        }
    }
}

async fn with_timeout<T>(
    timeout: Duration,
    fut: impl Future<Output = StudioResult<T>>,
) -> StudioResult<T> {
    tokio::time::timeout(timeout, fut)
        .await
        .unwrap_or_else(|_| Err(StudioError::Timeout(timeout)))
}

#[cfg(test)]
#[path = "../../tests/unit/editor/controller.rs"]
mod tests;
