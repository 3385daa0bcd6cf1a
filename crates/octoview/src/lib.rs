pub mod app;
pub mod domain;
pub mod infra;
pub mod runtime;
pub mod ui;

// Re-exports for convenience
pub use ui::icon;
