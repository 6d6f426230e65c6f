use super::jobs::JobMessage;
use super::*;
use std::sync::mpsc::TryRecvError;

impl EguiController {
    /// Apply every result the worker threads have reported since the last frame.
    pub fn poll_background_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };

            match message {
                JobMessage::PreviewDecoded(message) => self.apply_preview(message),
                JobMessage::Predicted(message) => self.apply_prediction(message),
                JobMessage::Retrained(message) => {
                    self.jobs.clear_retrain();
                    self.apply_retrain_result(message);
                }
                JobMessage::ServiceInfo(message) => {
                    self.jobs.clear_service_info();
                    self.apply_service_info(message);
                }
            }
        }
    }
}
