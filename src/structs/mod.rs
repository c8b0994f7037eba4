pub mod api;
pub mod resume;
