//! Interactive profile entry.
//!
//! Prompt order: basic info → summary → experience entries → education entries
//! → skills → certifications. Each repeated section ends when the user types
//! `done` at the entry's first prompt. Blank years default to 0; blank or
//! out-of-range months become 1.

use tracing::{info, warn};

use crate::acquisition::prompt::{is_done, LineSource};
use crate::errors::AppError;
use crate::models::{
    CertificationEntry, DateSpec, EducationEntry, ExperienceEntry, Profile, Skill,
};

const DEFAULT_YEAR: i32 = 0;
const DEFAULT_MONTH: i32 = 1;

/// Runs the full prompt sequence and returns the profile it describes.
/// Fails with `AppError::InputClosed` if input ends mid-sequence.
pub fn collect_profile(input: &mut dyn LineSource) -> Result<Profile, AppError> {
    input.say("\nManual Profile Input");
    input.say(&"=".repeat(50));

    let mut profile = Profile::default();

    input.say("\nBasic Information:");
    profile.first_name = optional(input.ask("First Name: ")?);
    profile.last_name = optional(input.ask("Last Name: ")?);
    profile.headline = optional(input.ask("Professional Headline: ")?);
    profile.location_name = optional(input.ask("Location (City, State/Country): ")?);
    profile.industry_name = optional(input.ask("Industry: ")?);
    profile.email = optional(input.ask("Email: ")?);
    profile.phone = optional(input.ask("Phone (optional): ")?);
    profile.website = optional(input.ask("Website/Portfolio URL (optional): ")?);

    input.say("\nProfessional Summary (enter 'done' on a new line when finished):");
    profile.summary = optional(input.ask_block("")?);

    input.say("\nWork Experience (enter 'done' to finish adding experiences):");
    while let Some(entry) = collect_experience(input, profile.experience.len() + 1)? {
        profile.experience.push(entry);
    }

    input.say("\nEducation (enter 'done' to finish):");
    while let Some(entry) = collect_education(input, profile.education.len() + 1)? {
        profile.education.push(entry);
    }

    input.say("\nSkills (comma-separated):");
    profile.skills = parse_skills(&input.ask("Skills: ")?);

    input.say("\nCertifications (enter 'done' to finish):");
    while let Some(entry) = collect_certification(input)? {
        profile.certifications.push(entry);
    }

    info!(
        "Manual entry complete: {} experience, {} education, {} skills, {} certifications",
        profile.experience.len(),
        profile.education.len(),
        profile.skills.len(),
        profile.certifications.len()
    );
    Ok(profile)
}

fn collect_experience(
    input: &mut dyn LineSource,
    number: usize,
) -> Result<Option<ExperienceEntry>, AppError> {
    input.say(&format!("\n  Experience #{number}:"));
    let title = input.ask("  Job Title (or 'done'): ")?;
    if is_done(&title) {
        return Ok(None);
    }

    let company_name = input.ask("  Company: ")?;
    let location_name = input.ask("  Location: ")?;
    let start_date = ask_year_month(input, "  Start Year: ", "  Start Month (1-12): ")?;

    let is_current = input
        .ask("  Current position? (y/n): ")?
        .eq_ignore_ascii_case("y");
    let end_date = if is_current {
        None
    } else {
        Some(ask_year_month(input, "  End Year: ", "  End Month (1-12): ")?)
    };

    input.say("  Description (enter 'done' on a new line when finished):");
    let description = input.ask_block("  ")?;

    Ok(Some(ExperienceEntry {
        title,
        company_name,
        location_name,
        description,
        start_date,
        end_date,
    }))
}

fn collect_education(
    input: &mut dyn LineSource,
    number: usize,
) -> Result<Option<EducationEntry>, AppError> {
    input.say(&format!("\n  Education #{number}:"));
    let school_name = input.ask("  School/University (or 'done'): ")?;
    if is_done(&school_name) {
        return Ok(None);
    }

    Ok(Some(EducationEntry {
        school_name,
        degree_name: input.ask("  Degree: ")?,
        field_of_study: input.ask("  Field of Study: ")?,
        start_date: Some(DateSpec::year(input.ask_number("  Start Year: ", DEFAULT_YEAR)?)),
        end_date: Some(DateSpec::year(input.ask_number("  End Year: ", DEFAULT_YEAR)?)),
        description: input.ask("  Description (optional): ")?,
    }))
}

fn collect_certification(input: &mut dyn LineSource) -> Result<Option<CertificationEntry>, AppError> {
    let name = input.ask("  Certification Name (or 'done'): ")?;
    if is_done(&name) {
        return Ok(None);
    }

    let authority = optional(input.ask("  Issuing Authority: ")?);
    let date_obtained = ask_year_month(input, "  Year Obtained: ", "  Month Obtained (1-12): ")?;

    Ok(Some(CertificationEntry {
        name,
        authority,
        date_obtained: Some(date_obtained),
    }))
}

fn ask_year_month(
    input: &mut dyn LineSource,
    year_prompt: &str,
    month_prompt: &str,
) -> Result<DateSpec, AppError> {
    let year = input.ask_number(year_prompt, DEFAULT_YEAR)?;
    let month = match input.ask_number(month_prompt, DEFAULT_MONTH)? {
        m @ 1..=12 => m,
        other => {
            warn!("'{other}' is not a month; using {DEFAULT_MONTH}");
            DEFAULT_MONTH
        }
    };
    Ok(DateSpec::new(year, u32::try_from(month).ok()))
}

fn parse_skills(line: &str) -> Vec<Skill> {
    line.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Skill::new)
        .collect()
}

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acquisition::prompt::ScriptedSource;

    fn basic_info() -> Vec<&'static str> {
        vec![
            "Ada",
            "Lovelace",
            "Engineer",
            "London",
            "Computing",
            "ada@example.com",
            "",
            "https://ada.dev",
        ]
    }

    #[test]
    fn test_minimal_entry_with_all_sections_skipped() {
        let mut answers = basic_info();
        answers.extend(["done", "done", "done", "", "done"]);
        let mut source = ScriptedSource::new(answers);

        let profile = collect_profile(&mut source).unwrap();

        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.phone, None);
        assert_eq!(profile.summary, None);
        assert!(profile.experience.is_empty());
        assert!(profile.education.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.certifications.is_empty());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_full_entry() {
        let mut answers = basic_info();
        answers.extend([
            // summary
            "Pioneer of computing.",
            "Poetical scientist.",
            "done",
            // experience #1: current role, blank start month
            "Analyst",
            "Analytical Engine Co",
            "London",
            "1842",
            "",
            "y",
            "Wrote notes",
            "Computed Bernoulli numbers",
            "done",
            // experience #2: ended role
            "Translator",
            "Taylor's Scientific Memoirs",
            "",
            "1840",
            "2",
            "n",
            "1843",
            "9",
            "done",
            "done",
            // education #1
            "Home Tutoring",
            "Mathematics",
            "Calculus",
            "1830",
            "",
            "Tutored by De Morgan",
            "done",
            // skills
            "Math, Logic, , Poetry ",
            // certification #1
            "Royal Society Fellow",
            "",
            "1840",
            "13",
            "done",
        ]);
        let mut source = ScriptedSource::new(answers);

        let profile = collect_profile(&mut source).unwrap();

        assert_eq!(
            profile.summary.as_deref(),
            Some("Pioneer of computing.\nPoetical scientist.")
        );

        assert_eq!(profile.experience.len(), 2);
        let current = &profile.experience[0];
        assert_eq!(current.start_date, DateSpec::new(1842, Some(1)));
        assert_eq!(current.end_date, None);
        assert_eq!(current.description, "Wrote notes\nComputed Bernoulli numbers");
        let past = &profile.experience[1];
        assert_eq!(past.location_name, "");
        assert_eq!(past.end_date, Some(DateSpec::new(1843, Some(9))));
        assert_eq!(past.description, "");

        assert_eq!(profile.education.len(), 1);
        assert_eq!(profile.education[0].start_date, Some(DateSpec::year(1830)));
        assert_eq!(profile.education[0].end_date, Some(DateSpec::year(0)));

        let skills: Vec<&str> = profile.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skills, vec!["Math", "Logic", "Poetry"]);

        assert_eq!(profile.certifications.len(), 1);
        assert_eq!(profile.certifications[0].authority, None);
        assert_eq!(
            profile.certifications[0].date_obtained,
            Some(DateSpec::new(1840, Some(1)))
        );
    }

    #[test]
    fn test_input_closed_mid_entry() {
        let mut answers = basic_info();
        answers.extend(["A summary", "done", "Analyst"]);
        let mut source = ScriptedSource::new(answers);

        assert!(matches!(
            collect_profile(&mut source),
            Err(AppError::InputClosed)
        ));
    }

    #[test]
    fn test_out_of_range_month_uses_default() {
        let mut source = ScriptedSource::new(["1842", "0"]);
        let date = ask_year_month(&mut source, "Year: ", "Month: ").unwrap();
        assert_eq!(date, DateSpec::new(1842, Some(1)));
    }

    #[test]
    fn test_parse_skills_drops_blanks() {
        let skills = parse_skills(" Rust ,, Go,");
        assert_eq!(skills, vec![Skill::new("Rust"), Skill::new("Go")]);
        assert!(parse_skills("").is_empty());
    }
}
