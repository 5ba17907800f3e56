pub mod caption;
pub mod client;
pub mod design;
pub mod gemini;
