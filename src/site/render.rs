//! Single-page HTML renderer
//!
//! Markup only. Styling and client-side animation live in the static assets.

use std::fmt::Write;

use crate::core::{bezier, catalog, Catalog, LEARNING_RATE_REGIONS, OPTIMIZATION_PATH};
use crate::models::{ExperienceItem, Project, SkillSet};
use crate::utils::constants::APP_NAME;

use super::header::NAV_ITEMS;

/// Everything the page shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageData {
    pub projects: Vec<Project>,
    pub skills: SkillSet,
    pub experience: Vec<ExperienceItem>,
}

impl From<Catalog> for PageData {
    fn from(catalog: Catalog) -> Self {
        Self {
            projects: catalog.projects,
            skills: catalog.skills,
            experience: catalog::experience(),
        }
    }
}

impl Default for PageData {
    fn default() -> Self {
        Catalog::default().into()
    }
}

/// Escape text for element content and double-quoted attributes
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(data: &PageData) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{} | ML Developer Portfolio</title>", APP_NAME);
    html.push_str("</head>\n<body>\n<div class=\"min-h-screen relative\">\n");

    render_background(&mut html);
    render_header(&mut html);
    html.push_str("<main class=\"relative z-10\">\n");
    render_hero(&mut html);
    render_about(&mut html);
    render_experience(&mut html, &data.experience);
    render_projects(&mut html, &data.projects);
    render_skills(&mut html, &data.skills);
    render_contact(&mut html);
    html.push_str("</main>\n");
    render_footer(&mut html);

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn render_background(html: &mut String) {
    html.push_str("<div class=\"adam-background\" aria-hidden=\"true\">\n");

    for (i, region) in LEARNING_RATE_REGIONS.iter().enumerate() {
        let _ = writeln!(
            html,
            "<div class=\"learning-rate-region learning-rate-region-{}\" style=\"left:{}%;top:{}%;width:{}%;height:{}%\" data-intensity=\"{}\"></div>",
            i, region.cx, region.cy, region.r, region.r, region.intensity
        );
    }

    html.push_str("<svg viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\">\n");
    let _ = writeln!(
        html,
        "<path class=\"optimization-path\" d=\"{}\" fill=\"none\"/>",
        bezier::svg_path()
    );
    html.push_str("<g class=\"particles\">\n");
    for point in OPTIMIZATION_PATH.iter() {
        let _ = writeln!(
            html,
            "<circle class=\"adam-particle\" cx=\"{}\" cy=\"{}\" r=\"0.2\"/>",
            point.x, point.y
        );
    }
    html.push_str("</g>\n");
    let start = bezier::point_on_path(0.0);
    let _ = writeln!(
        html,
        "<circle class=\"optimization-ball\" cx=\"{}\" cy=\"{}\" r=\"1.2\"/>",
        start.x, start.y
    );
    html.push_str("<text x=\"22\" y=\"8\">Start</text>\n<text x=\"88\" y=\"98\">Global Min</text>\n");
    html.push_str("</svg>\n</div>\n");
}

fn render_header(html: &mut String) {
    let _ = writeln!(html, "<header>\n<a href=\"#\" class=\"brand\">{}</a>\n<nav>", APP_NAME);
    for item in NAV_ITEMS.iter() {
        let _ = writeln!(html, "<a href=\"{}\">{}</a>", item.href, item.label);
    }
    html.push_str("</nav>\n<button aria-label=\"Toggle mobile menu\"></button>\n</header>\n");
}

fn render_hero(html: &mut String) {
    html.push_str(
        "<section id=\"hero\">\n\
         <h1>Transforming Data Into <span class=\"gradient-text\">Intelligent Solutions</span></h1>\n\
         <p>ML Developer with a curiosity-driven approach to solving complex problems. \
         I break things to build better solutions, turning cutting-edge research into \
         practical applications that drive startup innovation.</p>\n\
         <a href=\"#projects\" class=\"btn-primary\">View My Work</a>\n\
         <a href=\"#contact\" class=\"btn-secondary\">Let's Connect</a>\n\
         <ul class=\"highlights\"><li>Python &amp; TensorFlow</li><li>Cloud &amp; MLOps</li><li>Startup Ready</li></ul>\n\
         </section>\n",
    );
}

fn render_about(html: &mut String) {
    html.push_str(
        "<section id=\"about\">\n\
         <h2>Breaking Things to Build <span class=\"gradient-text\">Better Solutions</span></h2>\n\
         <p>My journey from curious student to ML developer is driven by one philosophy: \
         understanding systems by exploring their limits.</p>\n\
         <h3>Why Startups Love Working With Me</h3>\n<ul>\n\
         <li><strong>Rapid Learning:</strong> I adapt quickly to new technologies and frameworks</li>\n\
         <li><strong>Practical Focus:</strong> I build solutions that work in production, not just demos</li>\n\
         <li><strong>Ownership Mindset:</strong> I take responsibility for outcomes, not just code</li>\n\
         <li><strong>Cross-functional:</strong> I bridge technical complexity with business needs</li>\n\
         </ul>\n\
         <h3>Current Focus Areas</h3>\n<ul>\n\
         <li>Deep Learning &amp; Computer Vision</li>\n\
         <li>MLOps &amp; Production Systems</li>\n\
         <li>Experimental AI Applications</li>\n\
         </ul>\n\
         <p class=\"availability\">Available for new opportunities | Remote or Miami, FL</p>\n\
         </section>\n",
    );
}

fn render_experience(html: &mut String, items: &[ExperienceItem]) {
    html.push_str("<section id=\"experience\">\n<h2>Professional Experience</h2>\n");
    for item in items {
        html.push_str("<article class=\"experience\">\n");
        if let Some(logo) = &item.logo {
            let _ = writeln!(
                html,
                "<img src=\"{}\" alt=\"{} logo\">",
                escape(logo),
                escape(&item.company)
            );
        }
        let _ = writeln!(html, "<h3>{}</h3>", escape(&item.company));
        let _ = writeln!(html, "<p class=\"position\">{}</p>", escape(&item.position));
        if let Some(location) = &item.location {
            let _ = writeln!(html, "<p class=\"location\">{}</p>", escape(location));
        }
        let _ = writeln!(html, "<p class=\"period\">{}</p>\n<ul>", escape(&item.period));
        for line in &item.description {
            let _ = writeln!(html, "<li>{}</li>", escape(line));
        }
        html.push_str("</ul>\n</article>\n");
    }
    html.push_str("</section>\n");
}

fn render_projects(html: &mut String, projects: &[Project]) {
    html.push_str("<section id=\"projects\">\n<h2>Featured Projects</h2>\n");
    for project in projects {
        let _ = writeln!(html, "<article class=\"project\" data-id=\"{}\">", project.id);
        let _ = writeln!(
            html,
            "<img src=\"{}\" alt=\"{}\">",
            escape(&project.image),
            escape(&project.title)
        );
        let _ = writeln!(html, "<h3>{}</h3>", escape(&project.title));
        let _ = writeln!(html, "<p>{}</p>\n<ul class=\"tech\">", escape(&project.description));
        for tech in &project.tech {
            let _ = writeln!(html, "<li>{}</li>", escape(tech));
        }
        let _ = writeln!(
            html,
            "</ul>\n<a href=\"{}\" rel=\"noopener\">GitHub</a>\n<a href=\"{}\" rel=\"noopener\">Live Demo</a>",
            escape(&project.github),
            escape(&project.demo)
        );
        html.push_str("</article>\n");
    }
    html.push_str("</section>\n");
}

fn render_skills(html: &mut String, skills: &SkillSet) {
    html.push_str("<section id=\"skills\">\n<h2>Skills &amp; Expertise</h2>\n<div class=\"technical\">\n");
    for skill in &skills.technical {
        let _ = writeln!(
            html,
            "<div class=\"skill\"><span>{}</span><span>{}%</span><div class=\"bar\" style=\"width:{}%\"></div></div>",
            escape(&skill.name),
            skill.level,
            skill.bar_width_percent()
        );
    }
    html.push_str("</div>\n<ul class=\"soft\">\n");
    for soft in &skills.soft {
        let _ = writeln!(html, "<li>{}</li>", escape(soft));
    }
    html.push_str("</ul>\n</section>\n");
}

fn render_contact(html: &mut String) {
    html.push_str(
        "<section id=\"contact\">\n\
         <h2>Let's Build Something <span class=\"gradient-text\">Amazing</span></h2>\n\
         <form id=\"contact-form\">\n\
         <input type=\"text\" name=\"name\" required>\n\
         <input type=\"email\" name=\"email\" required>\n\
         <input type=\"text\" name=\"company\">\n\
         <textarea name=\"message\" required></textarea>\n\
         <button type=\"submit\">Send Message</button>\n\
         </form>\n\
         </section>\n",
    );
}

fn render_footer(html: &mut String) {
    let _ = writeln!(
        html,
        "<footer><p>&copy; {} {}</p></footer>",
        chrono::Utc::now().format("%Y"),
        APP_NAME
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_page_has_all_sections() {
        let html = render_page(&PageData::default());
        for id in ["hero", "about", "experience", "projects", "skills", "contact"] {
            assert!(html.contains(&format!("<section id=\"{}\">", id)), "missing {}", id);
        }
        assert!(html.contains("Neural Style Transfer"));
        assert!(html.contains("Technical Communication"));
        assert!(html.contains(&bezier::svg_path()));
    }

    #[test]
    fn test_skill_bar_width_is_clamped() {
        let mut data = PageData::default();
        data.skills.technical = vec![Skill::new("Overclocked", 150)];
        let html = render_page(&data);
        assert!(html.contains("style=\"width:100%\""));
    }

    #[test]
    fn test_project_text_is_escaped() {
        let mut data = PageData::default();
        data.projects[0].title = "<script>".to_string();
        let html = render_page(&data);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
