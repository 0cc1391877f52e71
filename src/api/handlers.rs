//! API Request Handlers

use axum::{
    extract::{Json, State},
    http::Uri,
    response::Html,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::types::HealthData;
use crate::core::Catalog;
use crate::models::{AppError, Project, SkillSet};
use crate::site::{render_page, PageData};

/// Shared application state. Read-only after startup.
pub struct AppState {
    pub catalog: Catalog,
    pub start_time: Instant,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

// ============================================
// JSON endpoints
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthData> {
    debug!(uptime_seconds = state.uptime_seconds(), "Health check");
    Json(HealthData::now())
}

pub async fn get_projects(State(state): State<Arc<AppState>>) -> Json<Vec<Project>> {
    Json(state.catalog.projects.clone())
}

pub async fn get_skills(State(state): State<Arc<AppState>>) -> Json<SkillSet> {
    Json(state.catalog.skills.clone())
}

// ============================================
// Page
// ============================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let data = PageData::from(state.catalog.clone());
    Html(render_page(&data))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}
