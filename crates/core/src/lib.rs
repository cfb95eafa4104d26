#![deny(unsafe_code)]
//! Core types for the canvas-gallery texture synthesizer.
//!
//! Provides the `Rgb` color utility, `TextureError`, the `Xorshift64` PRNG,
//! `ArtworkDescriptor` with seed derivation, the object-safe `Surface` trait
//! with its raqote-backed and recording implementations, the owned `Texture`
//! buffer, and `SynthConfig` with its parameter helpers.

pub mod color;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod geometry;
pub mod params;
pub mod prng;
pub mod raster;
pub mod recording;
pub mod surface;
pub mod texture;

pub use color::{Rgb, Rgba};
pub use config::{SeedPolicy, SynthConfig};
pub use descriptor::{seed_for, ArtworkDescriptor, StyleKind};
pub use error::TextureError;
pub use prng::Xorshift64;
pub use raster::{RasterSurface, MAX_SURFACE_DIMENSION};
pub use recording::{DrawCall, DrawKind, RecordingSurface};
pub use surface::{CubicBezier, Ellipse, GradientStop, PathCmd, Rect, Surface};
pub use texture::Texture;
