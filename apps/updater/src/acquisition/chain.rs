//! Acquisition chain: obtains exactly one Profile, or an explicit "none".
//!
//! States and transitions:
//!
//! ```text
//! Provider ──ok──────────────────────────────▶ Acquired
//!     │ no provider / auth or fetch failure
//!     ▼
//! Fallback ──"1"──▶ Manual ──ok──────────────▶ Acquired
//!     │    ──"2"──▶ File(path) ──ok──────────▶ Acquired
//!     │                 └──load failure──────▶ NoProfile(FileLoad)
//!     └──other / "exit"──────────────────────▶ NoProfile(UserExited)
//! ```
//!
//! A profile is built by a single state. Whatever the provider state fetched is
//! dropped before the chain moves on.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::acquisition::file::load_profile;
use crate::acquisition::manual::collect_profile;
use crate::acquisition::prompt::LineSource;
use crate::acquisition::provider::ProfileProvider;
use crate::errors::AppError;
use crate::models::Profile;

const FALLBACK_MENU: &str = "Would you like to:\n  1. Enter profile data manually\n  2. Load from JSON file\n  3. Exit\nChoice (1/2/3): ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOrigin {
    Provider,
    Manual,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoProfileReason {
    UserExited,
    InputClosed,
    FileLoad(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Acquisition {
    Acquired {
        profile: Profile,
        origin: ProfileOrigin,
    },
    NoProfile(NoProfileReason),
}

#[derive(Debug)]
enum State {
    Provider,
    Fallback,
    Manual,
    /// `None` = ask the user for a path.
    File(Option<PathBuf>),
    Done(Acquisition),
}

pub struct AcquisitionChain {
    provider: Option<Box<dyn ProfileProvider>>,
    public_id: Option<String>,
    initial: State,
}

impl AcquisitionChain {
    /// Full chain starting at the provider. `provider = None` skips straight to the fallback menu.
    pub fn new(provider: Option<Box<dyn ProfileProvider>>, public_id: Option<String>) -> Self {
        Self {
            provider,
            public_id,
            initial: State::Provider,
        }
    }

    /// Chain that only loads a saved profile (the "update existing resume" flow).
    pub fn from_file(path: PathBuf) -> Self {
        Self {
            provider: None,
            public_id: None,
            initial: State::File(Some(path)),
        }
    }

    pub async fn run(mut self, input: &mut dyn LineSource) -> Result<Acquisition, AppError> {
        let mut state = std::mem::replace(&mut self.initial, State::Provider);
        loop {
            state = match state {
                State::Done(outcome) => return Ok(outcome),
                State::Provider => self.provider_step(input).await,
                State::Fallback => fallback_step(input)?,
                State::Manual => manual_step(input)?,
                State::File(path) => file_step(path, input).await?,
            };
        }
    }

    async fn provider_step(&mut self, input: &mut dyn LineSource) -> State {
        input.say("\nConnecting to LinkedIn...");
        match self.fetch_from_provider().await {
            Some(profile) => State::Done(Acquisition::Acquired {
                profile,
                origin: ProfileOrigin::Provider,
            }),
            None => {
                input.say("\nCould not fetch LinkedIn profile automatically.");
                State::Fallback
            }
        }
    }

    /// State A. Every failure is logged and yields `None`.
    async fn fetch_from_provider(&mut self) -> Option<Profile> {
        let Some(provider) = self.provider.as_mut() else {
            info!("No provider credentials configured; skipping LinkedIn fetch");
            return None;
        };

        if let Err(e) = provider.authenticate().await {
            warn!("LinkedIn authentication failed: {e}");
            return None;
        }

        let public_id = self.public_id.as_deref();
        let mut profile = match provider.fetch_profile(public_id).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Error fetching profile: {e}");
                return None;
            }
        };

        match provider.fetch_contact_info(public_id).await {
            Ok(contact) => profile.merge_contact_info(contact),
            Err(e) => warn!("Error fetching contact info: {e}; continuing without it"),
        }
        Some(profile)
    }
}

fn fallback_step(input: &mut dyn LineSource) -> Result<State, AppError> {
    let Some(choice) = input.read_line(FALLBACK_MENU)? else {
        return Ok(State::Done(Acquisition::NoProfile(NoProfileReason::InputClosed)));
    };
    Ok(match choice.trim() {
        "1" => State::Manual,
        "2" => State::File(None),
        _ => {
            input.say("Exiting...");
            State::Done(Acquisition::NoProfile(NoProfileReason::UserExited))
        }
    })
}

fn manual_step(input: &mut dyn LineSource) -> Result<State, AppError> {
    match collect_profile(input) {
        Ok(profile) => Ok(State::Done(Acquisition::Acquired {
            profile,
            origin: ProfileOrigin::Manual,
        })),
        Err(AppError::InputClosed) => {
            warn!("Input closed during manual entry; no profile acquired");
            Ok(State::Done(Acquisition::NoProfile(NoProfileReason::InputClosed)))
        }
        Err(e) => Err(e),
    }
}

async fn file_step(path: Option<PathBuf>, input: &mut dyn LineSource) -> Result<State, AppError> {
    let path = match path {
        Some(path) => path,
        None => match input.read_line("Enter JSON file path: ")? {
            Some(line) if !line.trim().is_empty() => PathBuf::from(line.trim()),
            Some(_) => {
                return Ok(State::Done(Acquisition::NoProfile(NoProfileReason::FileLoad(
                    "no file path given".to_string(),
                ))))
            }
            None => return Ok(State::Done(Acquisition::NoProfile(NoProfileReason::InputClosed))),
        },
    };

    match load_profile(&path).await {
        Ok(profile) => Ok(State::Done(Acquisition::Acquired {
            profile,
            origin: ProfileOrigin::File(path),
        })),
        Err(e) => {
            warn!("{e}");
            Ok(State::Done(Acquisition::NoProfile(NoProfileReason::FileLoad(
                e.to_string(),
            ))))
        }
    }
}
