use super::{
    AlphaSpring, HeaderCollapse, RevealConfig, RevealInput, RevealPhase, ToolbarRevealState,
    evaluate,
};
use serde::Serialize;
use std::time::Duration;

/// Which header takes input. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderVariant {
    /// Compact toolbar pinned to the top.
    Toolbar,
    /// Full header inside the scrolling content.
    Inline,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealFrame {
    pub phase: RevealPhase,
    pub toolbar_alpha: f32,
    pub content_alpha: f32,
    pub header_height_px: f32,
    pub interactive: HeaderVariant,
}

/// Reveal state of one detail-view visit. Create a new session per visit;
/// dropping it is all the teardown there is.
#[derive(Debug, Clone)]
pub struct RevealSession {
    config: RevealConfig,
    state: ToolbarRevealState,
    toolbar_alpha: AlphaSpring,
    header: HeaderCollapse,
}

impl RevealSession {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            state: ToolbarRevealState::default(),
            toolbar_alpha: AlphaSpring::at_rest(0.0, config.spring),
            header: HeaderCollapse::new(config.app_bar_height_px),
        }
    }

    pub fn state(&self) -> &ToolbarRevealState {
        &self.state
    }

    pub fn phase(&self) -> RevealPhase {
        self.state.phase
    }

    pub fn on_scroll(&mut self, offset_px: f32) -> RevealPhase {
        self.apply(RevealInput::scroll(offset_px))
    }

    pub fn on_anchor(&mut self, position_px: f32) -> RevealPhase {
        self.apply(RevealInput::anchor(position_px))
    }

    pub fn on_nested_scroll(&mut self, delta_px: f32) {
        self.header.on_nested_scroll(delta_px);
    }

    pub fn apply(&mut self, input: RevealInput) -> RevealPhase {
        let outcome = evaluate(&self.state, input, &self.config);
        for error in &outcome.rejected {
            tracing::trace!(%error, "ignored reveal input");
        }
        if outcome.state.phase != self.state.phase {
            tracing::trace!(phase = ?outcome.state.phase, "toolbar reveal changed");
        }
        self.state = outcome.state;
        self.toolbar_alpha
            .set_target(if self.state.phase.is_shown() { 1.0 } else { 0.0 });
        self.state.phase
    }

    /// Advance the alpha animation by one frame.
    pub fn tick(&mut self, dt: Duration) -> RevealFrame {
        self.toolbar_alpha.step(dt);
        self.frame()
    }

    pub fn is_animating(&self) -> bool {
        !self.toolbar_alpha.is_settled()
    }

    pub fn frame(&self) -> RevealFrame {
        let toolbar_alpha = self.toolbar_alpha.value().clamp(0.0, 1.0);
        RevealFrame {
            phase: self.state.phase,
            toolbar_alpha,
            content_alpha: 1.0 - toolbar_alpha,
            header_height_px: self.header.height_px(),
            interactive: if self.state.phase.is_shown() {
                HeaderVariant::Toolbar
            } else {
                HeaderVariant::Inline
            },
        }
    }
}
