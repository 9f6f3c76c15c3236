use serde::{Deserialize, Serialize};

/// Partial year/month value. `year == 0` means unknown or ongoing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateSpec {
    #[serde(default)]
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

impl DateSpec {
    pub fn new(year: i32, month: Option<u32>) -> Self {
        Self { year, month }
    }

    pub fn year(year: i32) -> Self {
        Self { year, month: None }
    }

    pub fn is_known(&self) -> bool {
        self.year > 0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub location_name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateSpec,
    /// `None` (or year 0) = current position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub school_name: String,
    #[serde(default)]
    pub degree_name: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateSpec>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    #[serde(default)]
    pub name: String,
}

impl Skill {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CertificationEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_obtained: Option<DateSpec>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// The canonical resume subject. A plain value: built once per run by acquisition,
/// read-only afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<CertificationEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

/// Secondary contact record fetched from the provider alongside the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}

impl Profile {
    /// Fills contact fields that are still absent. Values from the primary record win.
    pub fn merge_contact_info(&mut self, contact: ContactInfo) {
        fill_if_missing(&mut self.email, contact.email);
        fill_if_missing(&mut self.phone, contact.phone);
        fill_if_missing(&mut self.website, contact.website);
    }

    /// `first last`, trimmed. Empty when neither name is set.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
        .trim()
        .to_string()
    }
}

fn fill_if_missing(slot: &mut Option<String>, value: Option<String>) {
    let missing = slot.as_deref().map_or(true, |s| s.trim().is_empty());
    if missing {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            *slot = Some(value);
        }
    }
}

/// Returns the trimmed value when it has content.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            first_name: Some("Grace".to_string()),
            last_name: Some("Hopper".to_string()),
            headline: Some("Rear Admiral".to_string()),
            email: Some("grace@navy.mil".to_string()),
            experience: vec![
                ExperienceEntry {
                    title: "Programmer".to_string(),
                    company_name: "Eckert-Mauchly".to_string(),
                    start_date: DateSpec::new(1949, Some(6)),
                    end_date: Some(DateSpec::new(1952, None)),
                    ..Default::default()
                },
                ExperienceEntry {
                    title: "Director".to_string(),
                    company_name: "US Navy".to_string(),
                    start_date: DateSpec::new(1967, Some(8)),
                    end_date: None,
                    ..Default::default()
                },
            ],
            skills: vec![Skill::new("COBOL"), Skill::new("Compilers")],
            certifications: vec![CertificationEntry {
                name: "Naval Reserve".to_string(),
                authority: None,
                date_obtained: Some(DateSpec::year(1943)),
            }],
            projects: vec![ProjectEntry {
                title: "FLOW-MATIC".to_string(),
                description: "English-like data processing language".to_string(),
                url: Some("https://example.com/flow-matic".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_profile_json_round_trip_preserves_order() {
        let profile = sample_profile();
        let json = serde_json::to_string_pretty(&profile).unwrap();
        let recovered: Profile = serde_json::from_str(&json).unwrap();

        assert_eq!(recovered, profile);
        assert_eq!(recovered.experience[0].title, "Programmer");
        assert_eq!(recovered.experience[1].title, "Director");
    }

    #[test]
    fn test_profile_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(value["firstName"], "Grace");
        assert_eq!(value["experience"][0]["companyName"], "Eckert-Mauchly");
        assert_eq!(value["experience"][0]["startDate"]["year"], 1949);
        assert_eq!(value["certifications"][0]["dateObtained"]["year"], 1943);
        assert!(value.get("phone").is_none());
    }

    #[test]
    fn test_zero_year_deserializes_as_unknown() {
        let spec: DateSpec = serde_json::from_str(r#"{"year": 0, "month": 0}"#).unwrap();
        assert!(!spec.is_known());

        let spec: DateSpec = serde_json::from_str("{}").unwrap();
        assert_eq!(spec.year, 0);
    }

    #[test]
    fn test_experience_requires_start_date() {
        let json = r#"{"title": "Engineer", "companyName": "Acme"}"#;
        let result: Result<ExperienceEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_object_is_a_valid_profile() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_merge_contact_info_never_overwrites() {
        let mut profile = sample_profile();
        profile.phone = Some("   ".to_string());
        profile.merge_contact_info(ContactInfo {
            email: Some("other@example.com".to_string()),
            phone: Some("+1 555 0100".to_string()),
            website: Some("https://hopper.dev".to_string()),
        });

        assert_eq!(profile.email.as_deref(), Some("grace@navy.mil"));
        assert_eq!(profile.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(profile.website.as_deref(), Some("https://hopper.dev"));
    }

    #[test]
    fn test_full_name_is_trimmed() {
        let profile = Profile {
            last_name: Some("Hopper".to_string()),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "Hopper");
        assert_eq!(Profile::default().full_name(), "");
    }
}
