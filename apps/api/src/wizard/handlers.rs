//! Axum route handlers for the wizard.
//!
//! Form posts apply one transition and answer 303 to `/`, which renders
//! whatever screen the session landed on.

use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    response::{Html, Redirect},
    Form, Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::profile::{encode_attachment, AttachmentError, ProfileField, ResumeAttachment};
use crate::render::render_session;
use crate::roadmap::Roadmap;
use crate::state::AppState;
use crate::wizard::session::{Screen, Session};
use crate::wizard::submit;

const ACTION_FIELD: &str = "action";
const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentSummary {
    pub file_name: String,
    pub mime_type: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    pub name: String,
    pub target_role: String,
    pub target_location: String,
    pub github_link: String,
    pub portfolio_link: String,
    pub passion_problem: String,
    pub resume: Option<AttachmentSummary>,
}

/// JSON view of the session. The resume payload itself is never echoed back.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub screen: Screen,
    pub profile: ProfileSnapshot,
    pub roadmap: Option<Roadmap>,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        let profile = session.profile();
        SessionSnapshot {
            screen: session.screen(),
            profile: ProfileSnapshot {
                name: profile.name.clone(),
                target_role: profile.target_role.clone(),
                target_location: profile.target_location.clone(),
                github_link: profile.github_link.clone(),
                portfolio_link: profile.portfolio_link.clone(),
                passion_problem: profile.passion_problem.clone(),
                resume: profile.resume.as_ref().map(|r| AttachmentSummary {
                    file_name: r.file_name.clone(),
                    mime_type: r.mime_type.clone(),
                }),
            },
            roadmap: session.roadmap().cloned(),
            error: session.error().map(str::to_string),
            notice: session.notice().map(str::to_string),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Form helpers
// ────────────────────────────────────────────────────────────────────────────

/// Splits a submitted form into profile edits and the pressed button.
/// Every other key must name a profile field; nothing is applied if one doesn't.
fn parse_profile_form(
    mut form: HashMap<String, String>,
) -> Result<(Vec<(ProfileField, String)>, Option<String>), AppError> {
    let action = form.remove(ACTION_FIELD);
    let edits = form
        .into_iter()
        .map(|(key, value)| Ok((key.parse::<ProfileField>()?, value)))
        .collect::<Result<Vec<_>, AppError>>()?;
    Ok((edits, action))
}

fn apply_edits(session: &mut Session, edits: Vec<(ProfileField, String)>) -> Result<(), AppError> {
    for (field, value) in edits {
        session.set_field(field, value)?;
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_show(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_session(&session))
}

/// GET /api/v1/session
pub async fn handle_snapshot(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.lock().await;
    Json(SessionSnapshot::from(&*session))
}

/// POST /start
pub async fn handle_start(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.session.lock().await.start()?;
    Ok(Redirect::to("/"))
}

/// POST /details
///
/// Saves the Details fields, then moves on (`action=next`, the default) or
/// back to Landing (`action=back`). A failed gate re-renders Details with a notice.
pub async fn handle_details(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Result<Redirect, AppError> {
    let (edits, action) = parse_profile_form(form)?;

    let mut session = state.session.lock().await;
    apply_edits(&mut session, edits)?;

    match action.as_deref() {
        Some("back") => session.back()?,
        Some("next") | None => session.proceed()?,
        Some(other) => return Err(AppError::Validation(format!("Unknown action: {other}"))),
    };

    Ok(Redirect::to("/"))
}

/// POST /resume (multipart)
///
/// Accepts an optional `resume` file plus the link fields. `action=generate`
/// (the default) starts the submission, `action=remove` drops the attached
/// resume and stays put, and `action=back` returns to Details. A named but
/// empty file drops any earlier resume and leaves a notice on the Resume screen.
pub async fn handle_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut fields = HashMap::new();
    let mut attachment: Option<ResumeAttachment> = None;
    let mut empty_upload: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == RESUME_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let declared = field.content_type().map(str::to_string);
            let bytes = field.bytes().await?;

            // A file input left blank still arrives as an empty, nameless part.
            if file_name.is_empty() && bytes.is_empty() {
                continue;
            }

            match encode_attachment(&bytes[..], &file_name, declared.as_deref()).await {
                Ok(encoded) => {
                    info!(
                        "Resume '{}' attached ({} bytes, {})",
                        encoded.file_name,
                        bytes.len(),
                        encoded.mime_type
                    );
                    attachment = Some(encoded);
                }
                Err(AttachmentError::Empty(file_name)) => {
                    warn!("Resume upload '{file_name}' is empty; no resume attached");
                    attachment = None;
                    empty_upload = Some(file_name);
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            fields.insert(name, field.text().await?);
        }
    }

    let (edits, action) = parse_profile_form(fields)?;

    {
        let mut session = state.session.lock().await;
        apply_edits(&mut session, edits)?;
        if let Some(attachment) = attachment {
            session.attach(attachment)?;
        } else if let Some(file_name) = empty_upload {
            session.discard_empty_upload(&file_name)?;
        }

        match action.as_deref() {
            Some("back") => {
                session.back()?;
                return Ok(Redirect::to("/"));
            }
            Some("remove") => {
                session.clear_attachment()?;
                return Ok(Redirect::to("/"));
            }
            Some("generate") | None => {}
            Some(other) => return Err(AppError::Validation(format!("Unknown action: {other}"))),
        }
    }

    // Runs detached; the browser polls the Loading screen.
    submit(state.session.clone(), state.requester.clone()).await?;

    Ok(Redirect::to("/"))
}

/// POST /retry
pub async fn handle_retry(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.session.lock().await.retry()?;
    Ok(Redirect::to("/"))
}

/// POST /restart
pub async fn handle_restart(State(state): State<AppState>) -> Result<Redirect, AppError> {
    state.session.lock().await.restart()?;
    Ok(Redirect::to("/"))
}
