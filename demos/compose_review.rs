//! Export every review template to `out/`, optionally with a photo as the main image.
//!
//! cargo run --example compose_review -- [photo.jpg]

use arte_studio::{
    CpuBackend, DirectorySink, EditorController, Family, ImageSlot, StudioConfig, TemplateId,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut editor = EditorController::with_config(Family::Review, StudioConfig::default());
    if let Some(path) = std::env::args().nth(1) {
        let bytes = std::fs::read(&path)?;
        if !editor.upload_image(ImageSlot::MainImage, Some(bytes)).await {
            anyhow::bail!("'{path}' is not a supported image");
        }
    }

    let mut backend = CpuBackend::new(editor.config().render_settings());
    tracing::info!(faces = backend.font_face_count(), "font database loaded");
    let mut sink = DirectorySink::new("out");
    for template in TemplateId::all(Family::Review) {
        editor.select_template(template)?;
        match editor.export_image(&mut backend, &mut sink) {
            Some(name) => println!("{template} {}: out/{name}", template.label()),
            None => println!("{template} {}: export failed", template.label()),
        }
    }
    Ok(())
}
