//! Per-artwork pointer state and the overlays derived from it.

use serde::Serialize;

/// Where one artwork sits in the hover and select cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Selected,
}

/// Input delivered to an [`Interaction`] by the host's picking code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
    Click,
    CloseDetail,
}

/// How captions and the detail panel react to interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayMode {
    /// The caption stays up while hovered or selected.
    #[default]
    Simple,
    /// Hover shows the caption; selection swaps it for the detail panel.
    Detailed,
}

impl OverlayMode {
    /// Whether the hover caption is drawn for a frame in `state`.
    pub fn caption_visible(self, state: InteractionState) -> bool {
        match self {
            OverlayMode::Simple => {
                matches!(state, InteractionState::Hovered | InteractionState::Selected)
            }
            OverlayMode::Detailed => state == InteractionState::Hovered,
        }
    }

    /// Only [`OverlayMode::Detailed`] has a detail panel; it shows while selected.
    pub fn detail_visible(self, state: InteractionState) -> bool {
        match self {
            OverlayMode::Simple => false,
            OverlayMode::Detailed => state == InteractionState::Selected,
        }
    }
}

/// The state machine for one artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Interaction {
    state: InteractionState,
}

impl Interaction {
    /// Starts idle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Feeds one event. Returns whether the state changed; pairs with no
    /// transition are ignored.
    pub fn apply(&mut self, event: PointerEvent) -> bool {
        use InteractionState::*;
        let next = match (self.state, event) {
            (Idle, PointerEvent::Enter) => Hovered,
            (Hovered, PointerEvent::Leave) => Idle,
            (Idle | Hovered, PointerEvent::Click) => Selected,
            (Selected, PointerEvent::CloseDetail) => Idle,
            (current, _) => current,
        };
        let changed = next != self.state;
        self.state = next;
        changed
    }
}

pub const HOVER_SCALE: f64 = 1.05;
pub const REST_SCALE: f64 = 1.0;
pub const SCALE_LERP: f64 = 0.1;

/// Eased frame scale for the hover zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameScale {
    value: f64,
}

impl Default for FrameScale {
    fn default() -> Self {
        Self { value: REST_SCALE }
    }
}

impl FrameScale {
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Advances one frame toward the hover or rest target and returns the new scale.
    pub fn tick(&mut self, hover_active: bool) -> f64 {
        let target = if hover_active { HOVER_SCALE } else { REST_SCALE };
        self.value += (target - self.value) * SCALE_LERP;
        self.value
    }
}

/// The small label shown next to a hovered frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caption {
    pub title: String,
    pub byline: String,
}

impl Caption {
    pub fn new(title: &str, artist: &str, year: &str) -> Self {
        Self {
            title: title.to_string(),
            byline: format!("{artist}, {year}"),
        }
    }
}
