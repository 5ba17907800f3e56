pub mod decode;
pub mod payload;
pub mod placeholder;
pub mod store;
