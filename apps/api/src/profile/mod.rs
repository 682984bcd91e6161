//! Profile Collector: the user's career profile as it is filled in across the
//! Details and Resume screens.
//!
//! The profile is a plain value. `Session` owns the live copy; submission hands
//! a frozen clone to the requester.

pub mod attachment;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub use attachment::{encode_attachment, AttachmentError, ResumeAttachment};

/// The six free-text fields of a profile, named as the HTML form names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Name,
    TargetRole,
    TargetLocation,
    GithubLink,
    PortfolioLink,
    PassionProblem,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::TargetRole,
        ProfileField::TargetLocation,
        ProfileField::GithubLink,
        ProfileField::PortfolioLink,
        ProfileField::PassionProblem,
    ];

    /// Fields that must be non-empty before leaving the Details screen.
    pub const REQUIRED: [ProfileField; 2] = [ProfileField::Name, ProfileField::TargetRole];

    pub fn form_name(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::TargetRole => "targetRole",
            ProfileField::TargetLocation => "targetLocation",
            ProfileField::GithubLink => "githubLink",
            ProfileField::PortfolioLink => "portfolioLink",
            ProfileField::PassionProblem => "passionProblem",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown profile field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for ProfileField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfileField::ALL
            .into_iter()
            .find(|field| field.form_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// Everything the user has told us so far. Defaults to all-empty with no resume.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub target_role: String,
    pub target_location: String,
    pub github_link: String,
    pub portfolio_link: String,
    pub passion_problem: String,
    pub resume: Option<ResumeAttachment>,
}

impl Profile {
    pub fn field(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::TargetRole => &self.target_role,
            ProfileField::TargetLocation => &self.target_location,
            ProfileField::GithubLink => &self.github_link,
            ProfileField::PortfolioLink => &self.portfolio_link,
            ProfileField::PassionProblem => &self.passion_problem,
        }
    }

    /// Stores the value exactly as entered; no trimming.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Name => &mut self.name,
            ProfileField::TargetRole => &mut self.target_role,
            ProfileField::TargetLocation => &mut self.target_location,
            ProfileField::GithubLink => &mut self.github_link,
            ProfileField::PortfolioLink => &mut self.portfolio_link,
            ProfileField::PassionProblem => &mut self.passion_problem,
        };
        *slot = value.into();
    }

    /// Replaces any previously attached resume.
    pub fn attach(&mut self, attachment: ResumeAttachment) {
        self.resume = Some(attachment);
    }

    pub fn clear_attachment(&mut self) {
        self.resume = None;
    }

    pub fn missing_required(&self) -> Vec<ProfileField> {
        ProfileField::REQUIRED
            .into_iter()
            .filter(|field| self.field(*field).is_empty())
            .collect()
    }

    pub fn is_submit_ready(&self) -> bool {
        self.missing_required().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_empty() {
        let profile = Profile::default();
        for field in ProfileField::ALL {
            assert_eq!(profile.field(field), "");
        }
        assert!(profile.resume.is_none());
    }

    #[test]
    fn test_set_field_targets_only_that_field() {
        let mut profile = Profile::default();
        profile.set_field(ProfileField::TargetLocation, "London");

        assert_eq!(profile.target_location, "London");
        assert_eq!(profile.name, "");
        assert_eq!(profile.target_role, "");
    }

    #[test]
    fn test_form_names_round_trip_through_from_str() {
        for field in ProfileField::ALL {
            assert_eq!(field.form_name().parse::<ProfileField>(), Ok(field));
        }
        assert_eq!(
            "resume".parse::<ProfileField>(),
            Err(UnknownField("resume".to_string()))
        );
    }

    #[test]
    fn test_submit_ready_requires_name_and_target_role() {
        let mut profile = Profile::default();
        assert_eq!(
            profile.missing_required(),
            vec![ProfileField::Name, ProfileField::TargetRole]
        );

        profile.set_field(ProfileField::Name, "Alex Chen");
        assert_eq!(profile.missing_required(), vec![ProfileField::TargetRole]);
        assert!(!profile.is_submit_ready());

        profile.set_field(ProfileField::TargetRole, "AI Engineer");
        assert!(profile.is_submit_ready());
    }

    #[test]
    fn test_optional_fields_do_not_gate_submission() {
        let mut profile = Profile::default();
        profile.set_field(ProfileField::Name, "Alex Chen");
        profile.set_field(ProfileField::TargetRole, "Senior PM");
        assert!(profile.target_location.is_empty());
        assert!(profile.resume.is_none());
        assert!(profile.is_submit_ready());
    }

    #[test]
    fn test_attach_replaces_previous_resume() {
        let mut profile = Profile::default();
        profile.attach(ResumeAttachment {
            file_name: "old.txt".to_string(),
            mime_type: "text/plain".to_string(),
            payload: "b2xk".to_string(),
        });
        profile.attach(ResumeAttachment {
            file_name: "new.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            payload: "bmV3".to_string(),
        });

        let resume = profile.resume.as_ref().unwrap();
        assert_eq!(resume.file_name, "new.pdf");

        profile.clear_attachment();
        assert!(profile.resume.is_none());
    }
}
