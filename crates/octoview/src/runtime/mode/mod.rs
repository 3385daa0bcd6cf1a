pub(crate) mod browse;
pub(crate) mod help;
pub(crate) mod setup;
pub(crate) mod viewer;
