pub mod cli;
pub mod render;
