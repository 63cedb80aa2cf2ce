pub mod assets;
pub mod format;
