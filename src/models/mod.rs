pub mod common;
pub mod image;
pub mod vision;

pub use common::*;
pub use image::*;
pub use vision::*;
