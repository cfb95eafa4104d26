//! The gallery room: catalog, per-frame interaction and the texture caches.

use crate::cache::TextureCache;
use crate::catalog::{Artwork, Catalog};
use crate::interaction::{Caption, FrameScale, Interaction, InteractionState, OverlayMode, PointerEvent};
use canvas_gallery_core::config::SynthConfig;
use canvas_gallery_core::descriptor::{ArtworkDescriptor, StyleKind};
use canvas_gallery_core::texture::Texture;
use canvas_gallery_styles::brush::{BrushProfile, BrushSettings};
use canvas_gallery_styles::generate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Everything the detail panel shows for a selected artwork.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Detail {
    pub title: String,
    pub original_title: String,
    pub artist: String,
    pub year: String,
    pub technique: String,
    pub description: String,
    pub meaning: String,
}

impl From<&Artwork> for Detail {
    fn from(a: &Artwork) -> Self {
        Self {
            title: a.title.clone(),
            original_title: a.original_title.clone(),
            artist: a.artist.clone(),
            year: a.year.clone(),
            technique: a.technique.clone(),
            description: a.description.clone(),
            meaning: a.meaning.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct Frame {
    interaction: Interaction,
    scale: FrameScale,
}

/// One room of hung artworks and everything needed to render and react to them.
///
/// Pointer methods take catalog ids; ids not in the catalog are ignored and
/// logged at debug level. At most one artwork is selected at a time.
pub struct Gallery {
    catalog: Catalog,
    overlay: OverlayMode,
    frames: BTreeMap<u32, Frame>,
    full: TextureCache,
    preview: TextureCache,
    resolution: i32,
    preview_resolution: i32,
}

impl Gallery {
    /// Builds a gallery with every artwork idle. The full and preview caches
    /// take their stroke settings from `config.params` and share its seed policy.
    pub fn new(catalog: Catalog, config: &SynthConfig, overlay: OverlayMode) -> Self {
        let frames = catalog.iter().map(|a| (a.id, Frame::default())).collect();
        let full = BrushSettings::from_json(&config.params, BrushProfile::Full);
        let preview = BrushSettings::from_json(&config.params, BrushProfile::Preview);
        Self {
            catalog,
            overlay,
            frames,
            full: TextureCache::new(full, config.seed_policy),
            preview: TextureCache::new(preview, config.seed_policy),
            resolution: config.resolution,
            preview_resolution: config.preview_resolution,
        }
    }

    /// The artworks on display, in catalog order.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// How captions and detail panels react to interaction.
    pub fn overlay(&self) -> OverlayMode {
        self.overlay
    }

    fn send(&mut self, id: u32, event: PointerEvent) -> bool {
        match self.frames.get_mut(&id) {
            Some(frame) => frame.interaction.apply(event),
            None => {
                log::debug!("ignoring {event:?} for unknown artwork {id}");
                false
            }
        }
    }

    /// The pointer moved onto `id`. Returns whether its state changed.
    pub fn pointer_enter(&mut self, id: u32) -> bool {
        self.send(id, PointerEvent::Enter)
    }

    /// The pointer left `id`. Returns whether its state changed.
    pub fn pointer_leave(&mut self, id: u32) -> bool {
        self.send(id, PointerEvent::Leave)
    }

    /// Selects `id`, closing whatever else was selected.
    pub fn click(&mut self, id: u32) -> bool {
        if !self.frames.contains_key(&id) {
            log::debug!("ignoring click for unknown artwork {id}");
            return false;
        }
        for (other, frame) in self.frames.iter_mut() {
            if *other != id {
                frame.interaction.apply(PointerEvent::CloseDetail);
            }
        }
        self.send(id, PointerEvent::Click)
    }

    /// Closes the detail panel of the selected artwork, if any.
    pub fn close_detail(&mut self) -> bool {
        match self.selected() {
            Some(id) => self.send(id, PointerEvent::CloseDetail),
            None => false,
        }
    }

    /// Current interaction state of `id`, or `None` for an unknown id.
    pub fn state(&self, id: u32) -> Option<InteractionState> {
        self.frames.get(&id).map(|f| f.interaction.state())
    }

    /// The id of the selected artwork, if any.
    pub fn selected(&self) -> Option<u32> {
        self.frames
            .iter()
            .find(|(_, f)| f.interaction.state() == InteractionState::Selected)
            .map(|(id, _)| *id)
    }

    /// The caption for `id` if the overlay mode shows one in its current state.
    pub fn caption(&self, id: u32) -> Option<Caption> {
        let state = self.state(id)?;
        if !self.overlay.caption_visible(state) {
            return None;
        }
        let a = self.catalog.get(id)?;
        Some(Caption::new(&a.title, &a.artist, &a.year))
    }

    /// The detail panel for `id` while it is selected.
    pub fn detail(&self, id: u32) -> Option<Detail> {
        let state = self.state(id)?;
        if !self.overlay.detail_visible(state) {
            return None;
        }
        self.catalog.get(id).map(Detail::from)
    }

    /// Current hover-zoom factor of `id`'s frame, starting at 1.0.
    pub fn scale(&self, id: u32) -> Option<f64> {
        self.frames.get(&id).map(|f| f.scale.value())
    }

    /// Advances every frame's hover zoom by one step.
    pub fn tick(&mut self) {
        let overlay = self.overlay;
        for frame in self.frames.values_mut() {
            frame
                .scale
                .tick(overlay.caption_visible(frame.interaction.state()));
        }
    }

    /// Full-resolution texture descriptor for `id`.
    pub fn descriptor(&self, id: u32) -> Option<ArtworkDescriptor> {
        self.catalog.get(id).map(|a| a.descriptor(self.resolution))
    }

    /// The full-size texture for `id`, painted on first request and cached.
    pub fn texture(&self, id: u32) -> Option<Arc<Texture>> {
        let d = self.descriptor(id)?;
        Some(self.full.get_or_create(&d))
    }

    /// The thumbnail texture for `id`, from the preview cache.
    pub fn preview_texture(&self, id: u32) -> Option<Arc<Texture>> {
        let d = self.catalog.get(id)?.descriptor(self.preview_resolution);
        Some(self.preview.get_or_create(&d))
    }

    /// Flat stand-in in the artwork's own color, used when a bitmap fails to load.
    pub fn fallback_texture(&self, id: u32) -> Option<Texture> {
        let a = self.catalog.get(id)?;
        let d = ArtworkDescriptor::new(
            a.base_color(),
            StyleKind::Generic,
            self.preview_resolution,
            self.preview_resolution,
        );
        let flat = BrushSettings {
            count: Some(0),
            ..BrushSettings::default()
        };
        Some(generate(&d, &flat, d.seed()))
    }

    /// Paints every full-size texture up front.
    pub fn warm(&self) {
        let ds: Vec<ArtworkDescriptor> = self
            .catalog
            .iter()
            .map(|a| a.descriptor(self.resolution))
            .collect();
        self.full.warm(&ds);
    }

    /// Cache holding the full-size textures.
    pub fn cache(&self) -> &TextureCache {
        &self.full
    }

    /// Cache holding the preview textures.
    pub fn preview_cache(&self) -> &TextureCache {
        &self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn small_gallery(overlay: OverlayMode) -> Gallery {
        let config = SynthConfig {
            resolution: 32,
            preview_resolution: 16,
            params: json!({ "stroke_count": 10 }),
            ..SynthConfig::default()
        };
        Gallery::new(Catalog::bundled(), &config, overlay)
    }

    #[test]
    fn starts_idle() {
        let g = small_gallery(OverlayMode::Simple);
        for a in g.catalog().iter() {
            assert_eq!(g.state(a.id), Some(InteractionState::Idle));
            assert_eq!(g.scale(a.id), Some(1.0));
        }
        assert_eq!(g.selected(), None);
    }

    #[test]
    fn click_keeps_single_selection() {
        let mut g = small_gallery(OverlayMode::Detailed);
        assert!(g.click(1));
        assert!(g.click(3));
        assert_eq!(g.selected(), Some(3));
        assert_eq!(g.state(1), Some(InteractionState::Idle));
        let selected = g
            .catalog()
            .iter()
            .filter(|a| g.state(a.id) == Some(InteractionState::Selected))
            .count();
        assert_eq!(selected, 1);
    }

    #[test]
    fn close_detail_returns_to_idle() {
        let mut g = small_gallery(OverlayMode::Detailed);
        assert!(!g.close_detail());
        g.click(5);
        assert!(g.detail(5).is_some());
        assert!(g.close_detail());
        assert_eq!(g.selected(), None);
        assert!(g.detail(5).is_none());
    }

    #[test]
    fn simple_overlay_has_no_detail_panel() {
        let mut g = small_gallery(OverlayMode::Simple);
        g.click(6);
        assert_eq!(g.selected(), Some(6));
        assert!(g.detail(6).is_none());
        assert!(g.caption(6).is_some());
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut g = small_gallery(OverlayMode::Simple);
        assert!(!g.pointer_enter(99));
        assert!(!g.click(99));
        assert_eq!(g.state(99), None);
        assert!(g.texture(99).is_none());
        assert!(g.caption(99).is_none());
        assert!(g.fallback_texture(99).is_none());
    }

    #[test]
    fn captions_follow_overlay_mode() {
        let mut simple = small_gallery(OverlayMode::Simple);
        assert!(simple.caption(1).is_none());
        simple.pointer_enter(1);
        let caption = simple.caption(1).unwrap();
        assert_eq!(caption.byline, "Vincent van Gogh, 1889");
        simple.click(1);
        assert!(simple.caption(1).is_some());

        let mut detailed = small_gallery(OverlayMode::Detailed);
        detailed.pointer_enter(1);
        assert!(detailed.caption(1).is_some());
        detailed.click(1);
        assert!(detailed.caption(1).is_none());
        assert_eq!(detailed.detail(1).unwrap().title, caption.title);
    }

    #[test]
    fn hovered_frame_grows_on_tick() {
        let mut g = small_gallery(OverlayMode::Simple);
        g.pointer_enter(2);
        g.tick();
        assert!(g.scale(2).unwrap() > 1.0);
        assert_eq!(g.scale(1), Some(1.0));
        g.pointer_leave(2);
        let hovered = g.scale(2).unwrap();
        g.tick();
        assert!(g.scale(2).unwrap() < hovered);
    }

    #[test]
    fn textures_are_cached_per_artwork() {
        let g = small_gallery(OverlayMode::Simple);
        let a = g.texture(2).unwrap();
        let b = g.texture(2).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!((a.width(), a.height()), (32, 32));

        let p = g.preview_texture(2).unwrap();
        assert_eq!((p.width(), p.height()), (16, 16));
        assert_eq!(g.cache().generation_count(), 1);
        assert_eq!(g.preview_cache().generation_count(), 1);
    }

    #[test]
    fn warm_fills_the_full_cache() {
        let g = small_gallery(OverlayMode::Simple);
        g.warm();
        assert_eq!(g.cache().len(), 7);
        assert!(g.preview_cache().is_empty());
    }

    #[test]
    fn fallback_is_flat_base_color() {
        let g = small_gallery(OverlayMode::Simple);
        let t = g.fallback_texture(4).unwrap();
        assert_eq!(t.style(), StyleKind::Generic);
        assert_eq!(t.pixel(0, 0), Some([0x81, 0xC7, 0x84, 255]));
        assert_eq!(t.pixel(15, 15), Some([0x81, 0xC7, 0x84, 255]));
    }
}
