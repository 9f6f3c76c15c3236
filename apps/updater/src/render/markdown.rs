//! Markdown renderer: Profile → resume document.
//!
//! Section order is fixed: header, headline, contact line, rule, summary,
//! experience, education, skills, certifications, projects. A section whose
//! backing data is empty is omitted entirely, so an empty Profile renders to a
//! header-only document.
//!
//! Enhancement runs as a separate async pre-pass (`enhance_prose`) producing
//! `EnhancedText`; `render_markdown` itself is pure and deterministic.

use tracing::{debug, info};

use crate::enhance::{enhance, TextEnhancer};
use crate::models::profile::non_empty;
use crate::models::{
    CertificationEntry, EducationEntry, ExperienceEntry, Profile, ProjectEntry,
};
use crate::render::date::format_date;

pub const SUMMARY_CONTEXT: &str = "professional summary";
pub const DESCRIPTION_CONTEXT: &str = "job description";

/// Rewritten prose to use instead of the profile's own text.
/// `None` (or a missing index) means "use the original".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnhancedText {
    pub summary: Option<String>,
    /// Indexed like `Profile::experience`.
    pub descriptions: Vec<Option<String>>,
}

impl EnhancedText {
    fn description(&self, index: usize) -> Option<&str> {
        self.descriptions.get(index).and_then(|d| d.as_deref())
    }
}

/// Renders the resume, optionally passing the summary and every experience
/// description through the enhancer first.
pub async fn render(profile: &Profile, enhance: bool, enhancer: &dyn TextEnhancer) -> String {
    let enhanced = if enhance {
        enhance_prose(profile, enhancer).await
    } else {
        EnhancedText::default()
    };
    render_markdown(profile, &enhanced)
}

/// Calls the enhancer once per non-empty prose field, sequentially.
/// Fail-open: a failed call leaves the original text in place.
pub async fn enhance_prose(profile: &Profile, enhancer: &dyn TextEnhancer) -> EnhancedText {
    let summary = match non_empty(profile.summary.as_deref()) {
        // Trimmed, exactly as `render_markdown` prints it when unenhanced.
        Some(original) => Some(enhance(enhancer, original, SUMMARY_CONTEXT).await),
        None => None,
    };

    let mut descriptions = Vec::with_capacity(profile.experience.len());
    for entry in &profile.experience {
        if entry.description.trim().is_empty() {
            descriptions.push(None);
        } else {
            descriptions.push(Some(
                enhance(enhancer, &entry.description, DESCRIPTION_CONTEXT).await,
            ));
        }
    }

    info!(
        "Enhanced {} prose fields",
        summary.iter().count() + descriptions.iter().flatten().count()
    );

    EnhancedText {
        summary,
        descriptions,
    }
}

/// Pure renderer. Identical inputs always produce byte-identical output.
pub fn render_markdown(profile: &Profile, enhanced: &EnhancedText) -> String {
    let mut md: Vec<String> = Vec::new();

    push_header(&mut md, profile);

    if let Some(original) = non_empty(profile.summary.as_deref()) {
        let summary = enhanced.summary.as_deref().unwrap_or(original);
        md.push("## Professional Summary\n".to_string());
        md.push(format!("{summary}\n"));
    }

    if !profile.experience.is_empty() {
        md.push("## Professional Experience\n".to_string());
        for (index, entry) in profile.experience.iter().enumerate() {
            push_experience(&mut md, entry, enhanced.description(index));
        }
    }

    if !profile.education.is_empty() {
        md.push("## Education\n".to_string());
        for entry in &profile.education {
            push_education(&mut md, entry);
        }
    }

    let skill_names: Vec<&str> = profile
        .skills
        .iter()
        .map(|s| s.name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    if !skill_names.is_empty() {
        md.push("## Skills\n".to_string());
        md.push(format!("{}\n", skill_names.join(", ")));
    }

    if !profile.certifications.is_empty() {
        md.push("## Certifications\n".to_string());
        for cert in &profile.certifications {
            md.push(certification_line(cert));
        }
        md.push(String::new());
    }

    if !profile.projects.is_empty() {
        md.push("## Projects\n".to_string());
        for project in &profile.projects {
            push_project(&mut md, project);
        }
    }

    debug!("Rendered {} markdown blocks", md.len());
    md.join("\n")
}

fn push_header(md: &mut Vec<String>, profile: &Profile) {
    md.push(format!("# {}\n", profile.full_name()));

    if let Some(headline) = non_empty(profile.headline.as_deref()) {
        md.push(format!("**{headline}**\n"));
    }

    let mut contact_parts: Vec<String> = Vec::new();
    for part in [&profile.email, &profile.phone, &profile.location_name] {
        if let Some(value) = non_empty(part.as_deref()) {
            contact_parts.push(value.to_string());
        }
    }
    if let Some(url) = non_empty(profile.website.as_deref()) {
        contact_parts.push(format!("[Portfolio]({url})"));
    }
    if !contact_parts.is_empty() {
        md.push(format!("{}\n", contact_parts.join(" | ")));
    }

    md.push("---\n".to_string());
}

fn push_experience(md: &mut Vec<String>, entry: &ExperienceEntry, enhanced: Option<&str>) {
    let start = format_date(Some(&entry.start_date), true);
    let end = format_date(entry.end_date.as_ref(), true);

    md.push(format!("### {}", entry.title));
    md.push(format!(
        "**{}** | {} | {start} - {end}\n",
        entry.company_name, entry.location_name
    ));

    if entry.description.trim().is_empty() {
        return;
    }
    let description = enhanced.unwrap_or(&entry.description);
    md.push(format!("{}\n", format_bullets(description)));
}

fn push_education(md: &mut Vec<String>, entry: &EducationEntry) {
    let degree = entry.degree_name.trim();
    let field = entry.field_of_study.trim();
    let degree_str = match (degree.is_empty(), field.is_empty()) {
        (false, false) => format!("{degree} in {field}"),
        (false, true) => degree.to_string(),
        (true, _) => field.to_string(),
    };

    let end = format_date(entry.end_date.as_ref(), false);
    let year_str = match entry.start_date.filter(|s| s.is_known()) {
        Some(start) => format!("{} - {end}", format_date(Some(&start), false)),
        None => end,
    };

    md.push(format!("### {}", entry.school_name));
    if degree_str.is_empty() {
        md.push(format!("{year_str}\n"));
    } else {
        md.push(format!("{degree_str} | {year_str}\n"));
    }

    if !entry.description.trim().is_empty() {
        md.push(format!("{}\n", entry.description));
    }
}

fn certification_line(cert: &CertificationEntry) -> String {
    let date = format_date(cert.date_obtained.as_ref(), false);
    match non_empty(cert.authority.as_deref()) {
        Some(authority) => format!("- **{}** - {authority} ({date})", cert.name),
        None => format!("- **{}** ({date})", cert.name),
    }
}

fn push_project(md: &mut Vec<String>, project: &ProjectEntry) {
    match non_empty(project.url.as_deref()) {
        Some(url) => md.push(format!("### [{}]({url})", project.title)),
        None => md.push(format!("### {}", project.title)),
    }
    if !project.description.trim().is_empty() {
        md.push(format!("{}\n", project.description));
    }
}

/// Turns free text into a bullet list. Text that already opens with a bullet
/// marker is returned untouched; otherwise every non-blank line gets `- `.
pub fn format_bullets(description: &str) -> String {
    let trimmed = description.trim();
    if trimmed.starts_with('-') || trimmed.starts_with('•') {
        return description.to_string();
    }

    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with('-') {
                line.to_string()
            } else {
                format!("- {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
