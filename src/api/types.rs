//! API Request/Response Types

use serde::{Deserialize, Serialize};

use crate::utils::constants::HEALTH_STATUS;

// ============================================
// Health Check
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthData {
    pub status: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

impl HealthData {
    pub fn now() -> Self {
        Self {
            status: HEALTH_STATUS.to_string(),
            timestamp: chrono::Utc::now()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        }
    }
}
