//! Scroll-linked header reveal for the plant detail view.
//!
//! [`evaluate`] is a pure step over an explicit [`ToolbarRevealState`]; the
//! host feeds it scroll and layout reports from whatever callback it has.
//! [`RevealSession`] layers the alpha spring and header collapse on top and is
//! advanced by the host's frame clock. Nothing here owns a timer.

mod header;
mod machine;
mod session;
mod spring;

use crate::configuration::RevealSettings;
use serde::Serialize;

pub use header::HeaderCollapse;
pub use machine::{
    Anchor, RevealInput, RevealOutcome, RevealPhase, ToolbarRevealState, evaluate, target_phase,
};
pub use session::{HeaderVariant, RevealFrame, RevealSession};
pub use spring::{AlphaSpring, SpringParams};

/// Reveal geometry in physical pixels. Served with the plant detail so the
/// client and the service agree on where the toolbar appears.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    /// How far above the anchor the toolbar starts to show, in px.
    pub transition_offset_px: f32,
    /// Anchor reports at or below this are treated as "not laid out yet".
    pub anchor_min_px: f32,
    pub app_bar_height_px: f32,
    pub spring: SpringParams,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::from_settings(&RevealSettings::default())
    }
}

impl RevealConfig {
    pub fn from_settings(settings: &RevealSettings) -> Self {
        Self {
            transition_offset_px: settings.transition_offset_dp * settings.density,
            anchor_min_px: settings.anchor_min_px,
            app_bar_height_px: settings.app_bar_height_dp * settings.density,
            spring: SpringParams {
                stiffness: settings.spring_stiffness,
                damping_ratio: settings.spring_damping_ratio,
            },
        }
    }
}
