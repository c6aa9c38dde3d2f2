pub mod json;

pub use json::{RenderOptions, render};
