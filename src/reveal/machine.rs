use super::RevealConfig;
use crate::error::CareError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevealPhase {
    #[default]
    Hidden,
    Shown,
}

impl RevealPhase {
    pub fn is_shown(self) -> bool {
        self == RevealPhase::Shown
    }
}

/// Position of the element the reveal is keyed to. Frozen once set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Anchor {
    #[default]
    Unset,
    At(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolbarRevealState {
    pub phase: RevealPhase,
    pub anchor: Anchor,
    pub scroll_offset: f32,
}

/// Reports gathered since the last evaluation. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RevealInput {
    pub scroll_offset: Option<f32>,
    pub anchor_position: Option<f32>,
}

impl RevealInput {
    pub fn scroll(offset: f32) -> Self {
        Self {
            scroll_offset: Some(offset),
            ..Self::default()
        }
    }

    pub fn anchor(position: f32) -> Self {
        Self {
            anchor_position: Some(position),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOutcome {
    pub state: ToolbarRevealState,
    /// Reports that were dropped as malformed.
    pub rejected: Vec<CareError>,
}

/// The phase the inputs in `state` call for.
pub fn target_phase(state: &ToolbarRevealState, config: &RevealConfig) -> RevealPhase {
    match state.anchor {
        Anchor::At(anchor) if state.scroll_offset > anchor - config.transition_offset_px => {
            RevealPhase::Shown
        }
        _ => RevealPhase::Hidden,
    }
}

/// Fold `input` into `state`.
///
/// The first anchor report above `config.anchor_min_px` sets the anchor;
/// later ones are ignored. Non-finite or negative values are rejected, and if
/// every report in `input` was rejected the previous phase is kept as is.
pub fn evaluate(
    state: &ToolbarRevealState,
    input: RevealInput,
    config: &RevealConfig,
) -> RevealOutcome {
    let mut next = *state;
    let mut rejected = Vec::new();
    let mut offered = 0;

    if let Some(position) = input.anchor_position {
        offered += 1;
        if !is_valid(position) {
            rejected.push(CareError::InvalidInput {
                field: "anchor_position",
                value: position,
            });
        } else if next.anchor == Anchor::Unset && position > config.anchor_min_px {
            next.anchor = Anchor::At(position);
        }
    }

    if let Some(offset) = input.scroll_offset {
        offered += 1;
        if is_valid(offset) {
            next.scroll_offset = offset;
        } else {
            rejected.push(CareError::InvalidInput {
                field: "scroll_offset",
                value: offset,
            });
        }
    }

    if offered == 0 || rejected.len() < offered {
        next.phase = target_phase(&next, config);
    }

    RevealOutcome {
        state: next,
        rejected,
    }
}

fn is_valid(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
