//! Ask Gemini for a live-commerce design and export the resulting frame to `out/`.
//!
//! GEMINI_API_KEY=... cargo run --example compose_live -- "ฟิลเลอร์ใต้ตา ลดพิเศษในไลฟ์"
//!
//! Without a key the seeded content is exported as-is.

use std::sync::Arc;

use arte_studio::{
    CaptionAssistant, CpuBackend, DesignAssistant, DirectorySink, EditorController, Family,
    StudioConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = StudioConfig::default();
    let brief = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Filler 1 แถม 1 เฉพาะในไลฟ์".to_string());
    let mut editor = EditorController::with_config(Family::Live, config.clone());

    match config.gemini_client() {
        Ok(client) => {
            let client = Arc::new(client);
            let designer = DesignAssistant::new(client.clone(), &config.model);
            let captioner = CaptionAssistant::new(client, &config.model);

            if editor.request_ai_design(&designer, &brief).await? {
                println!(
                    "template {} / font {}",
                    editor.template(),
                    editor.font().name
                );
            }
            if let Some(caption) = editor.request_caption(&captioner).await {
                println!("\n{caption}\n");
            }
        }
        Err(e) => println!("assistants disabled: {e}"),
    }

    let mut backend = CpuBackend::new(config.render_settings());
    let mut sink = DirectorySink::new("out");
    match editor.export_image(&mut backend, &mut sink) {
        Some(name) => println!("wrote out/{name}"),
        None => println!("export failed"),
    }
    Ok(())
}
