pub mod generate;
pub mod render;
