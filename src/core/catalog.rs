//! Static portfolio content
//!
//! The API serves this data and the page client falls back to the very same
//! values, so a failed fetch renders exactly what the server would have sent.

use crate::models::{ExperienceItem, Project, Skill, SkillSet};

/// Projects and skills bundled together, shared by the router and the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub skills: SkillSet,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            projects: projects(),
            skills: skills(),
        }
    }
}

fn project(
    id: u32,
    title: &str,
    description: &str,
    tech: &[&str],
    slug: &str,
    demo: &str,
) -> Project {
    Project {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        github: format!("https://github.com/example/{}", slug),
        demo: demo.to_string(),
        image: format!("/project{}.jpg", id),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            1,
            "Neural Style Transfer",
            "Deep learning model that applies artistic styles to images using TensorFlow and PyTorch",
            &["Python", "TensorFlow", "PyTorch", "OpenCV", "AWS"],
            "neural-style-transfer",
            "https://neural-style-demo.vercel.app",
        ),
        project(
            2,
            "Predictive Analytics Dashboard",
            "Real-time ML pipeline for customer behavior prediction with interactive visualizations",
            &["Python", "Scikit-learn", "React", "FastAPI", "PostgreSQL"],
            "predictive-dashboard",
            "https://predictive-dashboard.vercel.app",
        ),
        project(
            3,
            "NLP Sentiment Analyzer",
            "Multi-language sentiment analysis using transformer models and cloud deployment",
            &["Python", "Transformers", "Docker", "GCP", "FastAPI"],
            "sentiment-analyzer",
            "https://sentiment-analyzer.vercel.app",
        ),
        project(
            4,
            "Computer Vision Pipeline",
            "End-to-end object detection and tracking system for real-time video analysis",
            &["Python", "YOLO", "OpenCV", "MLflow", "Kubernetes"],
            "cv-pipeline",
            "https://cv-pipeline-demo.vercel.app",
        ),
    ]
}

pub fn skills() -> SkillSet {
    SkillSet {
        technical: vec![
            Skill::new("Python", 90),
            Skill::new("TensorFlow/PyTorch", 85),
            Skill::new("Machine Learning", 88),
            Skill::new("Deep Learning", 82),
            Skill::new("Data Science", 86),
            Skill::new("React/TypeScript", 80),
            Skill::new("AWS/GCP", 75),
            Skill::new("Docker/Kubernetes", 78),
        ],
        soft: [
            "Problem Solving",
            "Critical Thinking",
            "Curiosity-Driven Learning",
            "Collaborative Development",
            "Adaptability",
            "Technical Communication",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    }
}

const AI_INTERN_DUTIES: [&str; 4] = [
    "Implemented intelligent team dynamics analysis along with an automated recommendation system by integrating OpenAI's GPT-3.5-turbo model",
    "Leveraged insights from natural language processing and ML techniques to analyze team dynamics, generate data-driven recommendations, and provide actionable steps for teams to improve their synchrony",
    "Built and integrated custom dashboard and UI components into the existing full-stack platform, enhancing the insights derived from the application's AI-analytics",
    "Presented to stakeholders the technologies and methods used to implement the final dashboard/solution for the company",
];

fn to_strings(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| l.to_string()).collect()
}

pub fn experience() -> Vec<ExperienceItem> {
    vec![
        ExperienceItem {
            company: "EPIC | US Chamber of Commerce".to_string(),
            logo: Some("/assets/epic-chamber-logo.png".to_string()),
            position: "Full Stack Developer (AI Integration) Intern".to_string(),
            location: None,
            period: "Summer 2025".to_string(),
            description: to_strings(&AI_INTERN_DUTIES),
        },
        ExperienceItem {
            company: "Syneurgy".to_string(),
            logo: None,
            position: "Full Stack Developer (AI Integration) Intern".to_string(),
            location: None,
            period: "Summer 2025".to_string(),
            description: to_strings(&AI_INTERN_DUTIES),
        },
        ExperienceItem {
            company: "Wix.com".to_string(),
            logo: None,
            position: "Product Support Owner".to_string(),
            location: Some("Miami Beach, FL".to_string()),
            period: "August 2020 - June 2023".to_string(),
            description: to_strings(&[
                "Analyze data on user feedback and generate monthly and quarterly reports. Document user's pain points and work closely with Product Managers and relevant stakeholders on improving user experience and creating new features",
                "Update relevant departments the timeline of new releases and new internal workflows for the Wix Mobile App",
                "Deliver data-driven quarterly roadmap presentations to senior leadership including C-level executives on performance metrics for product",
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_ids_are_sequential() {
        let ids: Vec<u32> = projects().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_project_links() {
        let first = &projects()[0];
        assert_eq!(first.github, "https://github.com/example/neural-style-transfer");
        assert_eq!(first.image, "/project1.jpg");
        assert_eq!(first.tech.len(), 5);
    }

    #[test]
    fn test_skill_levels_in_range() {
        let set = skills();
        assert_eq!(set.technical.len(), 8);
        assert_eq!(set.soft.len(), 6);
        assert!(set.technical.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_experience_entries() {
        let items = experience();
        assert_eq!(items.len(), 3);
        assert!(items[0].logo.is_some());
        assert_eq!(items[2].location.as_deref(), Some("Miami Beach, FL"));
    }
}
