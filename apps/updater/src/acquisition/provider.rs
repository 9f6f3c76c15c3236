//! Profile provider: the authenticated first channel of the acquisition chain.
//!
//! `ProfileProvider` is the seam the chain depends on. `LinkedInClient` is the
//! production implementation: a thin credential exchange followed by two
//! Voyager reads (profile view, contact info). The provider's response shapes
//! are mapped onto `Profile` here so nothing else sees them.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{
    CertificationEntry, ContactInfo, DateSpec, EducationEntry, ExperienceEntry, Profile,
    ProjectEntry, Skill,
};

const LINKEDIN_BASE_URL: &str = "https://www.linkedin.com";
const AUTH_PATH: &str = "/uas/authenticate";
const VOYAGER_PATH: &str = "/voyager/api";
const SESSION_COOKIE: &str = "JSESSIONID";

const AUTH_USER_AGENT: &str = "LinkedIn/8.8.1 CFNetwork/711.3.18 Darwin/14.0.0";
const AUTH_LI_USER_AGENT: &str = "LIAuthLibrary:3.2.4 com.linkedin.LinkedIn:8.8.1 iPhone:8.3";
const API_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko)";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider credentials are not configured")]
    MissingCredentials,

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[async_trait]
pub trait ProfileProvider: Send + Sync {
    async fn authenticate(&mut self) -> Result<(), ProviderError>;

    /// Primary profile record. `public_id = None` means the authenticated member.
    async fn fetch_profile(&self, public_id: Option<&str>) -> Result<Profile, ProviderError>;

    /// Secondary contact record, merged into the profile by the chain.
    async fn fetch_contact_info(&self, public_id: Option<&str>)
        -> Result<ContactInfo, ProviderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LinkedIn client
// ────────────────────────────────────────────────────────────────────────────

pub struct LinkedInClient {
    client: Client,
    base_url: String,
    email: String,
    password: String,
    csrf_token: Option<String>,
}

impl LinkedInClient {
    pub fn new(email: String, password: String) -> Result<Self, ProviderError> {
        Self::with_base_url(email, password, LINKEDIN_BASE_URL)
    }

    pub fn with_base_url(
        email: String,
        password: String,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        if email.is_empty() || password.is_empty() {
            return Err(ProviderError::MissingCredentials);
        }
        let client = Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            email,
            password,
            csrf_token: None,
        })
    }

    fn api_headers(&self) -> Result<HeaderMap, ProviderError> {
        let token = self
            .csrf_token
            .as_deref()
            .ok_or_else(|| ProviderError::Fetch("not authenticated".to_string()))?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(API_USER_AGENT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US"));
        headers.insert("x-li-lang", HeaderValue::from_static("en_US"));
        headers.insert("x-restli-protocol-version", HeaderValue::from_static("2.0.0"));
        headers.insert(
            "csrf-token",
            HeaderValue::from_str(token)
                .map_err(|e| ProviderError::Authentication(format!("invalid session token: {e}")))?,
        );
        Ok(headers)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, ProviderError> {
        let url = format!("{}{VOYAGER_PATH}{path}", self.base_url);
        debug!("GET {url}");

        let response = self.client.get(&url).headers(self.api_headers()?).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Fetch(format!("{path} returned {status}")));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::Fetch(format!("{path}: unexpected response: {e}")))
    }

    async fn resolve_public_id(&self, public_id: Option<&str>) -> Result<String, ProviderError> {
        if let Some(id) = public_id.map(str::trim).filter(|id| !id.is_empty()) {
            return Ok(id.to_string());
        }
        let me: MeResponse = self.get_json("/me").await?;
        me.mini_profile
            .public_identifier
            .ok_or_else(|| ProviderError::Fetch("could not resolve own public id".to_string()))
    }
}

#[async_trait]
impl ProfileProvider for LinkedInClient {
    async fn authenticate(&mut self) -> Result<(), ProviderError> {
        let auth_url = format!("{}{AUTH_PATH}", self.base_url);

        // First request only seeds the session cookie.
        let seed = self.client.get(&auth_url).send().await?;
        let session = seed
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| session_token(c.value()))
            .ok_or_else(|| ProviderError::Authentication("no session cookie issued".to_string()))?;

        let form = [
            ("session_key", self.email.as_str()),
            ("session_password", self.password.as_str()),
            (SESSION_COOKIE, session.as_str()),
        ];
        let response = self
            .client
            .post(&auth_url)
            .header(USER_AGENT, AUTH_USER_AGENT)
            .header("X-Li-User-Agent", AUTH_LI_USER_AGENT)
            .header("X-User-Language", "en")
            .header("X-User-Locale", "en_US")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(ProviderError::Authentication("credentials rejected".to_string()));
        }
        if !status.is_success() {
            return Err(ProviderError::Authentication(format!("login returned {status}")));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Authentication(format!("unreadable login response: {e}")))?;
        check_login_result(&body)?;

        self.csrf_token = Some(session);
        info!("LinkedIn authentication successful");
        Ok(())
    }

    async fn fetch_profile(&self, public_id: Option<&str>) -> Result<Profile, ProviderError> {
        let id = self.resolve_public_id(public_id).await?;
        let view: ProfileView = self
            .get_json(&format!("/identity/profiles/{id}/profileView"))
            .await?;
        let profile = view.into_profile();
        info!(
            "Fetched profile '{id}' ({} positions, {} skills)",
            profile.experience.len(),
            profile.skills.len()
        );
        Ok(profile)
    }

    async fn fetch_contact_info(
        &self,
        public_id: Option<&str>,
    ) -> Result<ContactInfo, ProviderError> {
        let id = self.resolve_public_id(public_id).await?;
        let contact: ContactInfoResponse = self
            .get_json(&format!("/identity/profiles/{id}/profileContactInfo"))
            .await?;
        Ok(contact.into_contact_info())
    }
}

/// Cookie values arrive quoted (`"ajax:123"`); the token is the bare value.
fn session_token(raw: &str) -> String {
    raw.trim_matches('"').to_string()
}

fn check_login_result(body: &LoginResponse) -> Result<(), ProviderError> {
    match body.login_result.as_deref() {
        Some("PASS") => Ok(()),
        Some(other) => Err(ProviderError::Authentication(format!(
            "login result {other} (a verification challenge may be required)"
        ))),
        None => Err(ProviderError::Authentication("login result missing".to_string())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Provider response shapes
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct LoginResponse {
    login_result: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeResponse {
    mini_profile: MiniProfile,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MiniProfile {
    public_identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Elements<T> {
    #[serde(default = "Vec::new")]
    elements: Vec<T>,
}

impl<T> Default for Elements<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TimePeriod {
    start_date: Option<DateSpec>,
    end_date: Option<DateSpec>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct VoyagerProfile {
    first_name: Option<String>,
    last_name: Option<String>,
    headline: Option<String>,
    summary: Option<String>,
    location_name: Option<String>,
    industry_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Position {
    title: String,
    company_name: String,
    location_name: String,
    description: String,
    time_period: TimePeriod,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Education {
    school_name: String,
    degree_name: String,
    field_of_study: String,
    description: String,
    time_period: TimePeriod,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Certification {
    name: String,
    authority: Option<String>,
    time_period: TimePeriod,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Project {
    title: String,
    description: String,
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ProfileView {
    profile: VoyagerProfile,
    position_view: Elements<Position>,
    education_view: Elements<Education>,
    skill_view: Elements<Skill>,
    certification_view: Elements<Certification>,
    project_view: Elements<Project>,
}

impl ProfileView {
    fn into_profile(self) -> Profile {
        let p = self.profile;
        Profile {
            first_name: p.first_name,
            last_name: p.last_name,
            headline: p.headline,
            summary: p.summary,
            location_name: p.location_name,
            industry_name: p.industry_name,
            email: None,
            phone: None,
            website: None,
            experience: self
                .position_view
                .elements
                .into_iter()
                .map(|pos| ExperienceEntry {
                    title: pos.title,
                    company_name: pos.company_name,
                    location_name: pos.location_name,
                    description: pos.description,
                    start_date: pos.time_period.start_date.unwrap_or_default(),
                    end_date: pos.time_period.end_date,
                })
                .collect(),
            education: self
                .education_view
                .elements
                .into_iter()
                .map(|edu| EducationEntry {
                    school_name: edu.school_name,
                    degree_name: edu.degree_name,
                    field_of_study: edu.field_of_study,
                    start_date: edu.time_period.start_date,
                    end_date: edu.time_period.end_date,
                    description: edu.description,
                })
                .collect(),
            skills: self.skill_view.elements,
            certifications: self
                .certification_view
                .elements
                .into_iter()
                .map(|cert| CertificationEntry {
                    name: cert.name,
                    authority: cert.authority,
                    date_obtained: cert.time_period.start_date,
                })
                .collect(),
            projects: self
                .project_view
                .elements
                .into_iter()
                .map(|proj| ProjectEntry {
                    title: proj.title,
                    description: proj.description,
                    url: proj.url,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ContactInfoResponse {
    email_address: Option<String>,
    websites: Vec<Website>,
    phone_numbers: Vec<PhoneNumber>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Website {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PhoneNumber {
    number: Option<String>,
}

impl ContactInfoResponse {
    fn into_contact_info(self) -> ContactInfo {
        ContactInfo {
            email: self.email_address,
            phone: self.phone_numbers.into_iter().find_map(|p| p.number),
            website: self.websites.into_iter().find_map(|w| w.url),
        }
    }
}
