mod chrome;
mod live;
pub mod registry;
mod review;
