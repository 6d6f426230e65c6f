//! Library exports for reuse in the binary and tests.
/// Client for the remote classification service.
pub mod api;
/// Application directory helpers.
pub mod app_dirs;
/// Persisted settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Tracing setup.
pub mod logging;
/// Static display metadata for waste categories.
pub mod waste_info;

pub(crate) mod http_client;
