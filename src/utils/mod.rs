//! Utility modules for the site generator.

pub mod color;
pub mod html;
pub mod minify;
