//! UI state for the retraining upload panel.

use std::time::Instant;

/// Side panel used to upload images for model retraining.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RetrainPanelState {
    pub visible: bool,
    /// True while an upload is in flight.
    pub submitting: bool,
    /// Outcome of the last upload, shown until the panel hides itself.
    pub message: Option<RetrainMessage>,
    /// When the panel should hide after showing `message`.
    pub hide_at: Option<Instant>,
}

/// Transient banner describing the last retrain upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetrainMessage {
    pub text: String,
    pub success: bool,
}
