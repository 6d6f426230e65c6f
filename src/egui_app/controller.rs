//! Root controller owning the UI state.
//!
//! Network calls and image decoding run on worker threads and report back
//! through [`jobs::ControllerJobs`]; the UI thread applies their results in
//! [`EguiController::poll_background_jobs`], so [`UiState`] has a single writer.

mod background_jobs;
mod jobs;
mod predict;
mod preview;
mod retrain;
mod service_info;

#[cfg(test)]
mod test_support;

pub use preview::{MAX_PREVIEW_SIDE, PreviewError, decode_preview};

use std::sync::Arc;

use crate::api::ClassifierApi;
use crate::config::AppSettings;
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use jobs::ControllerJobs;

/// Message shown when a prediction fails, whatever the cause.
pub const PREDICT_ERROR_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// Maintains app state and bridges the classification service to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    api: Arc<dyn ClassifierApi>,
    settings: AppSettings,
    jobs: ControllerJobs,
    /// Token of the current predict attempt; results carrying another token are stale.
    attempt: u64,
}

impl EguiController {
    pub fn new(api: Arc<dyn ClassifierApi>, settings: AppSettings) -> Self {
        Self {
            ui: UiState::default(),
            api,
            settings,
            jobs: ControllerJobs::new(),
            attempt: 0,
        }
    }

    /// Settings the controller was built with.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Base URL of the classification service.
    pub fn api_base_url(&self) -> &str {
        &self.settings.api.base_url
    }

    /// Which main view should be rendered.
    pub fn phase(&self) -> ViewPhase {
        self.ui.phase()
    }

    /// True while any worker thread has yet to report back.
    pub fn has_pending_jobs(&self) -> bool {
        self.jobs.in_flight() > 0
    }

    fn next_attempt(&mut self) -> u64 {
        self.attempt = self.attempt.wrapping_add(1);
        self.attempt
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }
}
