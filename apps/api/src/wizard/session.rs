//! The wizard state machine.
//!
//! Landing → Details → Resume → Loading → {Result | Error}
//! Error → Details keeps the profile; Result → Landing wipes it.
//!
//! Every action either performs its transition or returns
//! `WizardError::InvalidTransition` and leaves the session untouched.

use serde::Serialize;
use thiserror::Error;

use crate::profile::{Profile, ProfileField, ResumeAttachment};
use crate::roadmap::{RequestError, Roadmap};

/// Shown when Details is submitted without a name or target role.
pub const MISSING_IDENTITY_NOTICE: &str = "Identify yourself and your mission first!";

pub fn empty_upload_notice(file_name: &str) -> String {
    format!("'{file_name}' is empty, so no resume is attached.")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Landing,
    Details,
    Resume,
    Loading,
    Result,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Back,
    Proceed,
    EditProfile,
    Submit,
    Complete,
    Retry,
    Restart,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Cannot {action:?} from the {from:?} screen")]
    InvalidTransition { from: Screen, action: Action },
}

/// All state of the one active session. Owned by the application state and
/// handed to handlers by reference.
#[derive(Debug, Clone)]
pub struct Session {
    screen: Screen,
    profile: Profile,
    roadmap: Option<Roadmap>,
    error: Option<String>,
    notice: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            screen: Screen::Landing,
            profile: Profile::default(),
            roadmap: None,
            error: None,
            notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn roadmap(&self) -> Option<&Roadmap> {
        self.roadmap.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // ── profile edits ───────────────────────────────────────────────────────

    pub fn set_field(
        &mut self,
        field: ProfileField,
        value: impl Into<String>,
    ) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.profile.set_field(field, value);
        Ok(())
    }

    pub fn attach(&mut self, attachment: ResumeAttachment) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.profile.attach(attachment);
        Ok(())
    }

    pub fn clear_attachment(&mut self) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.profile.clear_attachment();
        Ok(())
    }

    /// An upload with no content replaces any earlier resume with nothing and
    /// tells the user so, leaving the screen as it was.
    pub fn discard_empty_upload(&mut self, file_name: &str) -> Result<(), WizardError> {
        self.ensure_editable()?;
        self.profile.clear_attachment();
        self.notice = Some(empty_upload_notice(file_name));
        Ok(())
    }

    /// The profile can only change while one of the two form screens is showing.
    fn ensure_editable(&self) -> Result<(), WizardError> {
        match self.screen {
            Screen::Details | Screen::Resume => Ok(()),
            from => Err(WizardError::InvalidTransition {
                from,
                action: Action::EditProfile,
            }),
        }
    }

    // ── transitions ─────────────────────────────────────────────────────────

    pub fn start(&mut self) -> Result<Screen, WizardError> {
        self.require_screen(Screen::Landing, Action::Start)?;
        Ok(self.go(Screen::Details))
    }

    pub fn back(&mut self) -> Result<Screen, WizardError> {
        let target = match self.screen {
            Screen::Details => Screen::Landing,
            Screen::Resume => Screen::Details,
            from => {
                return Err(WizardError::InvalidTransition {
                    from,
                    action: Action::Back,
                })
            }
        };
        Ok(self.go(target))
    }

    /// Details → Resume when name and target role are filled in. Otherwise
    /// the session stays on Details with a notice; this is not an error.
    pub fn proceed(&mut self) -> Result<Screen, WizardError> {
        self.require_screen(Screen::Details, Action::Proceed)?;
        if !self.profile.is_submit_ready() {
            self.notice = Some(MISSING_IDENTITY_NOTICE.to_string());
            return Ok(self.screen);
        }
        Ok(self.go(Screen::Resume))
    }

    /// Resume → Loading. Returns the frozen profile to send.
    pub fn begin_submission(&mut self) -> Result<Profile, WizardError> {
        self.require_screen(Screen::Resume, Action::Submit)?;
        self.go(Screen::Loading);
        Ok(self.profile.clone())
    }

    /// Loading → Result or Error, depending on the request outcome.
    pub fn complete_submission(
        &mut self,
        outcome: Result<Roadmap, RequestError>,
    ) -> Result<Screen, WizardError> {
        self.require_screen(Screen::Loading, Action::Complete)?;
        match outcome {
            Ok(roadmap) => {
                self.roadmap = Some(roadmap);
                self.error = None;
                Ok(self.go(Screen::Result))
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                Ok(self.go(Screen::Error))
            }
        }
    }

    /// Error → Details with the profile intact.
    pub fn retry(&mut self) -> Result<Screen, WizardError> {
        self.require_screen(Screen::Error, Action::Retry)?;
        self.error = None;
        Ok(self.go(Screen::Details))
    }

    /// Result → Landing. Forgets the profile and the roadmap.
    pub fn restart(&mut self) -> Result<Screen, WizardError> {
        self.require_screen(Screen::Result, Action::Restart)?;
        *self = Session::new();
        Ok(self.screen)
    }

    fn require_screen(&self, from: Screen, action: Action) -> Result<(), WizardError> {
        if self.screen == from {
            Ok(())
        } else {
            Err(WizardError::InvalidTransition {
                from: self.screen,
                action,
            })
        }
    }

    fn go(&mut self, screen: Screen) -> Screen {
        self.notice = None;
        self.screen = screen;
        screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roadmap::requester::REQUEST_FAILED_MESSAGE;
    use crate::test_support::sample_roadmap;

    fn session_on_resume() -> Session {
        let mut session = Session::new();
        session.start().unwrap();
        session.set_field(ProfileField::Name, "Alex Chen").unwrap();
        session.set_field(ProfileField::TargetRole, "AI Engineer").unwrap();
        session.proceed().unwrap();
        session
    }

    #[test]
    fn test_initial_screen_is_landing() {
        let session = Session::new();
        assert_eq!(session.screen(), Screen::Landing);
        assert_eq!(session.profile(), &Profile::default());
        assert!(session.roadmap().is_none());
    }

    #[test]
    fn test_happy_path_reaches_result() {
        let mut session = session_on_resume();
        assert_eq!(session.screen(), Screen::Resume);

        let frozen = session.begin_submission().unwrap();
        assert_eq!(frozen.name, "Alex Chen");
        assert_eq!(session.screen(), Screen::Loading);

        let screen = session
            .complete_submission(Ok(sample_roadmap(&["One", "Two", "Three"])))
            .unwrap();
        assert_eq!(screen, Screen::Result);
        assert_eq!(session.roadmap().unwrap().phases.len(), 3);
    }

    #[test]
    fn test_gate_blocks_without_name_or_role() {
        let cases: [(&str, &str); 3] = [("", ""), ("Alex", ""), ("", "AI Engineer")];
        for (name, role) in cases {
            let mut session = Session::new();
            session.start().unwrap();
            session.set_field(ProfileField::Name, name).unwrap();
            session.set_field(ProfileField::TargetRole, role).unwrap();
            session.set_field(ProfileField::TargetLocation, "Remote").unwrap();
            let before = session.profile().clone();

            let screen = session.proceed().unwrap();

            assert_eq!(screen, Screen::Details);
            assert_eq!(session.notice(), Some(MISSING_IDENTITY_NOTICE));
            assert_eq!(session.profile(), &before);
        }
    }

    #[test]
    fn test_notice_clears_once_gate_passes() {
        let mut session = Session::new();
        session.start().unwrap();
        session.proceed().unwrap();
        assert!(session.notice().is_some());

        session.set_field(ProfileField::Name, "Alex").unwrap();
        session.set_field(ProfileField::TargetRole, "PM").unwrap();
        assert_eq!(session.proceed().unwrap(), Screen::Resume);
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_failure_lands_on_error_and_retry_preserves_profile() {
        let mut session = session_on_resume();
        session
            .attach(ResumeAttachment {
                file_name: "cv.md".to_string(),
                mime_type: "text/markdown".to_string(),
                payload: "IyBBbGV4".to_string(),
            })
            .unwrap();
        let before = session.profile().clone();

        session.begin_submission().unwrap();
        let screen = session
            .complete_submission(Err(RequestError::EmptyResponse))
            .unwrap();
        assert_eq!(screen, Screen::Error);
        assert_eq!(session.error(), Some(REQUEST_FAILED_MESSAGE));
        assert!(session.roadmap().is_none());
        assert_eq!(session.profile(), &before);

        assert_eq!(session.retry().unwrap(), Screen::Details);
        assert_eq!(session.profile(), &before);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_empty_upload_drops_earlier_resume_and_explains() {
        let mut session = session_on_resume();
        session
            .attach(ResumeAttachment {
                file_name: "old-cv.pdf".to_string(),
                mime_type: "application/pdf".to_string(),
                payload: "JVBERg==".to_string(),
            })
            .unwrap();

        session.discard_empty_upload("blank.pdf").unwrap();

        assert_eq!(session.screen(), Screen::Resume);
        assert!(session.profile().resume.is_none());
        assert_eq!(session.notice(), Some(empty_upload_notice("blank.pdf").as_str()));

        session.begin_submission().unwrap();
        assert!(session.notice().is_none());
        assert!(session.discard_empty_upload("blank.pdf").is_err());
    }

    #[test]
    fn test_restart_resets_profile_and_discards_roadmap() {
        let mut session = session_on_resume();
        session.begin_submission().unwrap();
        session.complete_submission(Ok(sample_roadmap(&["One"]))).unwrap();

        assert_eq!(session.restart().unwrap(), Screen::Landing);
        assert_eq!(session.profile(), &Profile::default());
        assert!(session.roadmap().is_none());
    }

    #[test]
    fn test_back_edges_preserve_profile() {
        let mut session = session_on_resume();
        let before = session.profile().clone();

        assert_eq!(session.back().unwrap(), Screen::Details);
        assert_eq!(session.back().unwrap(), Screen::Landing);
        assert_eq!(session.profile(), &before);
    }

    #[test]
    fn test_profile_is_frozen_outside_form_screens() {
        let mut session = Session::new();
        assert_eq!(
            session.set_field(ProfileField::Name, "Alex"),
            Err(WizardError::InvalidTransition {
                from: Screen::Landing,
                action: Action::EditProfile
            })
        );

        let mut session = session_on_resume();
        session.begin_submission().unwrap();
        assert!(session.set_field(ProfileField::Name, "Changed").is_err());
        assert!(session.clear_attachment().is_err());
        assert_eq!(session.profile().name, "Alex Chen");
    }

    #[test]
    fn test_illegal_actions_change_nothing() {
        let mut session = session_on_resume();
        session.begin_submission().unwrap();

        assert!(session.begin_submission().is_err());
        assert!(session.retry().is_err());
        assert!(session.restart().is_err());
        assert!(session.back().is_err());
        assert_eq!(session.screen(), Screen::Loading);

        let mut landing = Session::new();
        assert!(landing.complete_submission(Ok(sample_roadmap(&[]))).is_err());
        assert!(landing.roadmap().is_none());
        assert_eq!(landing.screen(), Screen::Landing);
    }
}
