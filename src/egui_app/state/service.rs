//! Diagnostics window state for the remote service.

use crate::api::{ClassList, HealthStatus, ServiceStats};

/// Results of the last service diagnostics refresh.
///
/// Each query fails independently; errors are kept as display strings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceInfoState {
    pub open: bool,
    pub checking: bool,
    pub health: Option<Result<HealthStatus, String>>,
    pub stats: Option<Result<ServiceStats, String>>,
    pub classes: Option<Result<ClassList, String>>,
}
