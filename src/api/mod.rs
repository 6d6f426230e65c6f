//! Client for the remote waste classification service.
//!
//! [`ApiClient`] talks to the service over HTTP; the controller only sees the
//! [`ClassifierApi`] trait so tests can substitute a local fake.

mod client;
mod error;
mod image_file;
pub mod multipart;
mod types;

pub use client::{ApiClient, ClassifierApi, DEFAULT_BASE_URL};
pub use error::{RequestError, RetrainError};
pub use image_file::{ImageFile, ImageFileError, SUPPORTED_EXTENSIONS, is_supported_image_name};
pub use types::{
    ClassList, HealthStatus, PredictionResult, PredictionStats, RetrainOutcome, ServiceStats,
};
