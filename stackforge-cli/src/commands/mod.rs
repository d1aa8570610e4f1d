pub mod render;
pub mod secret;
pub mod templates;
