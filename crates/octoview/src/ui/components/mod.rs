pub mod footer_bar;
pub mod help_overlay;
pub mod status_bar;
