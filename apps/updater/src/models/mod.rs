pub mod profile;

pub use profile::{
    CertificationEntry, ContactInfo, DateSpec, EducationEntry, ExperienceEntry, Profile,
    ProjectEntry, Skill,
};
