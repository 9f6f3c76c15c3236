// Profile acquisition: provider fetch → manual entry | saved JSON, in that order.
// All interactive input goes through `prompt::LineSource`.

pub mod chain;
pub mod file;
pub mod manual;
pub mod prompt;
pub mod provider;

pub use chain::{Acquisition, AcquisitionChain, NoProfileReason, ProfileOrigin};
