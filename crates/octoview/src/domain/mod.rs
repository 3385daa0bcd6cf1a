//! Pure data types shared by the browser and viewer: listing entries, parsed
//! JSON trees, navigation history, and the failure taxonomy.

pub mod entry;
pub mod error;
pub mod json;
pub mod navigation;
