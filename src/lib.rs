//! ML.DEV Portfolio Library
//!
//! Single-page personal portfolio:
//! - Static JSON API (health, projects, skills)
//! - Server-side page rendering with a silent fallback to bundled data
//! - Controlled contact form with a simulated submission
//! - Scroll-driven Bézier background math

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod site;
pub mod utils;

pub use api::{create_app, create_router, AppState, HealthData};
pub use crate::core::{BackgroundFrame, Catalog};
pub use models::{
    AppError, AppResult, ClientConfig, ContactForm, ErrorCode, ExperienceItem, Point, Project,
    ServerConfig, Skill, SkillSet,
};
pub use providers::PortfolioClient;
pub use site::{render_page, ContactFormState, HeaderState, PageData};
