//! Data models for Freelo

mod catalog;
mod draft;
mod image;
mod publish;
mod user;

pub use catalog::*;
pub use draft::*;
pub use image::*;
pub use publish::*;
pub use user::*;
