pub mod render;
pub mod serve;
pub mod templates;
pub mod vars;
pub mod version;
