use std::sync::Mutex;

use async_trait::async_trait;

use super::*;

struct Scripted {
    reply: StudioResult<String>,
    seen: Mutex<Vec<GenerateRequest>>,
}

impl Scripted {
    fn new(reply: StudioResult<String>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl GenerativeClient for Scripted {
    async fn generate(&self, request: GenerateRequest) -> StudioResult<String> {
        self.seen.lock().unwrap().push(request);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(e) => Err(StudioError::remote(e.to_string())),
        }
    }
}

const LIVE_REPLY: &str = r#"{
  "headline": "ด่วน!",
  "title": "Botox 50u",
  "subtitle": "คืนนี้เท่านั้น",
  "promotion": "a\nb",
  "price": "4,999.-",
  "template": "LIVE_BANNER",
  "fontKeyword": "Kanit"
}"#;

#[tokio::test]
async fn design_parses_reply_and_sends_schema() {
    let client = Scripted::new(Ok(LIVE_REPLY.to_string()));
    let assistant = DesignAssistant::new(client.clone(), "gemini-3-flash-preview");

    let design = assistant.design(Family::Live, "โบท็อกซ์").await.unwrap();
    assert_eq!(design.title, "Botox 50u");
    assert_eq!(design.price.as_deref(), Some("4,999.-"));
    assert_eq!(design.font_keyword, "Kanit");

    let seen = client.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].model, "gemini-3-flash-preview");
    assert!(seen[0].prompt.contains("\"โบท็อกซ์\""));
    assert_eq!(
        seen[0].response_schema.as_ref().unwrap()["type"],
        "OBJECT"
    );
}

#[tokio::test]
async fn failures_become_none() {
    let broken = DesignAssistant::new(Scripted::new(Ok("not json".to_string())), "m");
    assert!(broken.design(Family::Live, "x").await.is_none());

    let down = DesignAssistant::new(
        Scripted::new(Err(StudioError::remote("503"))),
        "m",
    );
    assert!(down.design(Family::Review, "x").await.is_none());
}

#[test]
fn price_is_optional_and_blank_price_is_dropped() {
    let no_price = r#"{"headline":"h","title":"t","subtitle":"s","promotion":"p","template":"STYLE_2","fontKeyword":"Bodoni"}"#;
    assert_eq!(parse_design(no_price).unwrap().price, None);

    let blank = r#"{"headline":"h","title":"t","subtitle":"s","promotion":"p","price":" ","template":"STYLE_2","fontKeyword":"Bodoni"}"#;
    assert_eq!(parse_design(blank).unwrap().price, None);

    let missing_title = r#"{"headline":"h","subtitle":"s","promotion":"p","template":"x","fontKeyword":"y"}"#;
    assert!(matches!(parse_design(missing_title), Err(StudioError::Serde(_))));
}

#[test]
fn schema_requires_everything_but_price() {
    let schema = design_schema(Family::Live);
    let required: Vec<&str> = schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        required,
        ["headline", "title", "subtitle", "promotion", "template", "fontKeyword"]
    );
    assert_eq!(schema["properties"]["price"]["type"], "STRING");
    assert_eq!(
        schema["properties"]["template"]["description"],
        "One of: LIVE_MINIMAL, LIVE_BANNER, LIVE_SIDEBAR, LIVE_FULL_PROMO"
    );
}

#[test]
fn prompt_lists_family_templates_and_fonts() {
    let prompt = design_prompt(Family::Review, "ฟิลเลอร์หน้าผาก");
    assert!(prompt.contains("- STYLE_1 ("));
    assert!(prompt.contains("- LIVE ("));
    assert!(!prompt.contains("LIVE_BANNER"));
    assert!(prompt.contains("Available Fonts: Prompt, Kanit"));
    assert!(prompt.contains("\"ฟิลเลอร์หน้าผาก\""));
}
