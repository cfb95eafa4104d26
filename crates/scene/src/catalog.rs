//! The gallery's artwork metadata and its mapping onto texture descriptors.

use canvas_gallery_core::color::Rgb;
use canvas_gallery_core::descriptor::{ArtworkDescriptor, StyleKind};
use canvas_gallery_core::error::TextureError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

/// One hung artwork: display metadata plus the parameters of its texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: u32,
    pub title: String,
    pub original_title: String,
    pub artist: String,
    pub year: String,
    pub technique: String,
    pub description: String,
    pub meaning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Hex base color, kept raw so malformed input can fall back at render time.
    pub color: String,
    /// Style key, kept raw for the same reason.
    pub style: String,
    /// World-space placement of the frame.
    pub position: [f64; 3],
    /// Euler rotation of the frame, in radians.
    pub rotation: [f64; 3],
    /// World-space size of the painted panel.
    pub size: [f64; 2],
}

impl Artwork {
    /// Square texture descriptor at `resolution` pixels per side.
    pub fn descriptor(&self, resolution: i32) -> ArtworkDescriptor {
        ArtworkDescriptor::from_keys(&self.color, &self.style, resolution, resolution)
    }

    pub fn base_color(&self) -> Rgb {
        Rgb::from_hex_or_gray(&self.color)
    }

    pub fn style_kind(&self) -> StyleKind {
        StyleKind::from_key(&self.style)
    }
}

/// An ordered collection of artworks with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    artworks: Vec<Artwork>,
}

impl Catalog {
    /// Parses a JSON array of artworks and rejects duplicate ids.
    pub fn from_json(json: &str) -> Result<Self, TextureError> {
        let artworks: Vec<Artwork> =
            serde_json::from_str(json).map_err(|e| TextureError::Catalog(e.to_string()))?;
        let mut seen = HashSet::new();
        for artwork in &artworks {
            if !seen.insert(artwork.id) {
                return Err(TextureError::Catalog(format!(
                    "duplicate artwork id {}",
                    artwork.id
                )));
            }
        }
        Ok(Self { artworks })
    }

    /// The seven pieces hung in the default room.
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CATALOG) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!("bundled catalog is unreadable: {e}");
                Self {
                    artworks: Vec::new(),
                }
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<&Artwork> {
        self.artworks.iter().find(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artwork> {
        self.artworks.iter()
    }

    pub fn len(&self) -> usize {
        self.artworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artworks.is_empty()
    }

    /// Serializes back to the camelCase JSON layout.
    pub fn to_json(&self) -> Result<String, TextureError> {
        serde_json::to_string_pretty(&self.artworks).map_err(|e| TextureError::Catalog(e.to_string()))
    }
}
