//! level-gen: interactively collect `demo/*png` image paths for level generation.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{collect_images, collect_images_with};
pub use domain::{AppError, ImageNameRule, RequestOutcome, SessionExit, SessionOutcome, is_valid};
