//! Gallery-side state for canvas-gallery: the artwork catalog, a shared
//! texture cache, and the pointer interaction model for each frame.

#![deny(unsafe_code)]

pub mod cache;
pub mod catalog;
pub mod gallery;
pub mod interaction;

pub use cache::{CacheKey, TextureCache};
pub use catalog::{Artwork, Catalog};
pub use gallery::{Detail, Gallery};
pub use interaction::{Caption, FrameScale, Interaction, InteractionState, OverlayMode, PointerEvent};
