pub mod browser;
pub mod setup;
pub mod viewer;
