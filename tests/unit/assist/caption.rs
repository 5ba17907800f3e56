use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::foundation::error::StudioError;

struct Scripted {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl GenerativeClient for Scripted {
    async fn generate(&self, request: GenerateRequest) -> StudioResult<String> {
        assert!(request.response_schema.is_none());
        self.prompts.lock().unwrap().push(request.prompt);
        self.reply
            .clone()
            .ok_or_else(|| StudioError::remote("connection refused"))
    }
}

fn assistant(reply: Option<&str>) -> (Arc<Scripted>, CaptionAssistant) {
    let client = Arc::new(Scripted {
        reply: reply.map(str::to_string),
        prompts: Mutex::new(Vec::new()),
    });
    (client.clone(), CaptionAssistant::new(client, "m"))
}

#[tokio::test]
async fn caption_text_is_returned_verbatim() {
    let (client, a) = assistant(Some("ไลฟ์สดคืนนี้! CF ใต้คอมเมนต์"));
    let text = a
        .caption(Family::Live, "นาทีทอง! Filler 1 แถม 1", "line1\nline2")
        .await
        .unwrap();
    assert_eq!(text, "ไลฟ์สดคืนนี้! CF ใต้คอมเมนต์");
    let prompts = client.prompts.lock().unwrap();
    assert!(prompts[0].contains("treatment: นาทีทอง! Filler 1 แถม 1."));
    assert!(prompts[0].contains("line1\nline2"));
}

#[tokio::test]
async fn blank_caption_falls_back_to_apology() {
    let (_, a) = assistant(Some("  \n"));
    assert_eq!(
        a.caption(Family::Review, "t", "p").await.unwrap(),
        CAPTION_FALLBACK
    );
}

#[tokio::test]
async fn transport_errors_propagate() {
    let (_, a) = assistant(None);
    assert!(matches!(
        a.caption(Family::Live, "t", "p").await,
        Err(StudioError::Remote(_))
    ));
}

#[test]
fn prompts_differ_by_family() {
    let live = caption_prompt(Family::Live, "t", "p");
    let review = caption_prompt(Family::Review, "t", "p");
    assert!(live.contains("Facebook Live"));
    assert!(review.contains("before/after"));
    assert_ne!(live, review);
}
