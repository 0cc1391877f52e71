//! Constants Module - Single Source of Truth
//!
//! Every constant shared across modules is defined here.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Site brand shown in the header
pub const APP_NAME: &str = "ML.DEV";

/// User-Agent for the page data client
pub const USER_AGENT: &str = concat!("mldev-portfolio/", env!("CARGO_PKG_VERSION"));

// ============================================
// SERVER CONSTANTS
// ============================================

pub const DEFAULT_HOST: &str = "0.0.0.0";

pub const DEFAULT_PORT: u16 = 5174;

/// Body of `GET /api/health`
pub const HEALTH_STATUS: &str = "Server is running";

// ============================================
// CLIENT CONSTANTS
// ============================================

pub const DEFAULT_API_URL: &str = "http://localhost:5174";

pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// Simulated contact form submission delay
pub const DEFAULT_CONTACT_DELAY_MS: u64 = 1000;

// ============================================
// PAGE CONSTANTS
// ============================================

/// Header switches to its solid style past this scroll offset (px)
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Opacity of the background when the client prefers reduced motion
pub const REDUCED_MOTION_OPACITY: f64 = 0.1;
