//! Type definitions for the portfolio
//! Plain records served by the API and rendered on the page

use serde::{Deserialize, Serialize};

/// A portfolio project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Technology tags shown as chips
    pub tech: Vec<String>,
    /// Source repository URL
    pub github: String,
    /// Live demo URL
    pub demo: String,
    /// Image path relative to the site root
    pub image: String,
}

/// A technical skill with a proficiency level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency 0-100, only used for the progress bar width
    pub level: u8,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: u8) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Progress bar width in percent, clamped to 0..=100
    pub fn bar_width_percent(&self) -> u8 {
        self.level.min(100)
    }
}

/// Response body of `GET /api/skills`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: Vec<Skill>,
    pub soft: Vec<String>,
}

/// One entry of the professional experience timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub period: String,
    pub description: Vec<String>,
}

/// Contact form fields. Never persisted or transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.company.is_empty()
            && self.message.is_empty()
    }
}

/// Point in the 100x100 background viewBox
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
