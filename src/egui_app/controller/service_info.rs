use tracing::{debug, warn};

use super::jobs::ServiceInfoResult;
use super::*;

impl EguiController {
    /// Open the diagnostics window and query health, stats and classes.
    ///
    /// A refresh already in flight is not duplicated.
    pub fn refresh_service_info(&mut self) {
        self.ui.service.open = true;
        if self.jobs.begin_service_info(self.api.clone()) {
            debug!("Refreshing service info");
            self.ui.service.checking = true;
        }
    }

    /// Hide the diagnostics window, keeping the last results.
    pub fn close_service_info(&mut self) {
        self.ui.service.open = false;
    }

    pub(super) fn apply_service_info(&mut self, message: ServiceInfoResult) {
        let service = &mut self.ui.service;
        service.checking = false;
        if let Err(err) = &message.health {
            warn!(error = %err, "Health check failed");
        }
        service.health = Some(message.health.map_err(|err| err.to_string()));
        service.stats = Some(message.stats.map_err(|err| err.to_string()));
        service.classes = Some(message.classes.map_err(|err| err.to_string()));
        let (text, tone) = match &service.health {
            Some(Ok(health)) => (format!("Service: {}", health.summary()), StatusTone::Info),
            _ => ("Service unreachable".to_string(), StatusTone::Warning),
        };
        self.set_status(text, tone);
    }
}
