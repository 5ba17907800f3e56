pub mod fonts;
pub mod model;
