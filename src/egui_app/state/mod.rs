//! Shared state types for the egui UI.
//!
//! The controller owns a single [`UiState`] and is the only writer; renderers
//! read it each frame.

mod preview;
mod retrain;
mod service;
mod status;

pub use preview::*;
pub use retrain::*;
pub use service::*;
pub use status::*;

use crate::api::PredictionResult;

/// Which main view is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing selected; the uploader is shown.
    Idle,
    /// A prediction request is in flight.
    Loading,
    /// A prediction is available.
    Result,
}

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    /// Preview of the image being classified.
    pub preview: Option<PreviewImage>,
    /// Latest successful classification.
    pub prediction: Option<PredictionResult>,
    /// True while a predict request is in flight.
    pub loading: bool,
    /// User-facing error banner, cleared at the start of every attempt.
    pub error: Option<String>,
    /// True while supported files hover the window.
    pub drop_hovered: bool,
    pub retrain: RetrainPanelState,
    pub service: ServiceInfoState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            preview: None,
            prediction: None,
            loading: false,
            error: None,
            drop_hovered: false,
            retrain: RetrainPanelState::default(),
            service: ServiceInfoState::default(),
        }
    }
}

impl UiState {
    /// Current main view, derived from the loading flag and prediction.
    pub fn phase(&self) -> ViewPhase {
        if self.loading {
            ViewPhase::Loading
        } else if self.prediction.is_some() {
            ViewPhase::Result
        } else {
            ViewPhase::Idle
        }
    }
}
