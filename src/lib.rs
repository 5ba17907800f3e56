//! arte-studio composes clinic marketing artwork from editable content and fixed templates.
//!
//! The crate is a headless editor core:
//!
//! - An [`EditorController`] owns one session's [`ContentModel`], template and font selection
//! - Templates turn content into a [`Scene`], the visual tree the preview and export share
//! - The CPU renderer rasterizes scenes and [`export`] writes them out as PNG
//! - [`assist`] asks a generative model for copy, layout and captions
#![forbid(unsafe_code)]

pub mod assets;
pub mod assist;
pub mod content;
pub mod editor;
pub mod export;
pub mod foundation;
pub mod render;
pub mod scene;
pub mod template;

pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8};
pub use crate::foundation::error::{StudioError, StudioResult};

pub use crate::assets::payload::ImagePayload;
pub use crate::assist::caption::CaptionAssistant;
pub use crate::assist::client::{GenerateRequest, GenerativeClient};
pub use crate::assist::design::{AiDesign, DesignAssistant};
pub use crate::assist::gemini::GeminiClient;
pub use crate::content::fonts::{FONT_OPTIONS, FontOption, match_font_keyword};
pub use crate::content::model::{ContentModel, Family, ImageSlot, TextField, split_promotion};
pub use crate::editor::config::StudioConfig;
pub use crate::editor::controller::{EditorController, Ticket};
pub use crate::export::sink::{DirectorySink, ExportSink, InMemorySink};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::{FrameRGBA, RenderBackend, RenderSettings};
pub use crate::scene::model::Scene;
pub use crate::template::registry::{LiveTemplate, ReviewTemplate, TemplateId};
