pub mod filesystem;
pub mod pdf;
