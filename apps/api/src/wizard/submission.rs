//! Submission: Resume → Loading → {Result | Error}.
//!
//! The transition to Loading happens under the session lock before the request
//! is issued, so a second submit while one is in flight is rejected and at most
//! one request exists at a time. The request itself runs on a spawned task;
//! nothing cancels it once issued.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::roadmap::RoadmapRequester;
use crate::wizard::session::{Screen, Session, WizardError};

/// Starts a submission. Returns the handle of the task that will settle the
/// session on Result or Error.
///
/// The caller must not hold the session lock.
pub async fn submit(
    session: Arc<Mutex<Session>>,
    requester: Arc<dyn RoadmapRequester>,
) -> Result<JoinHandle<Screen>, WizardError> {
    let profile = session.lock().await.begin_submission()?;

    let submission_id = Uuid::new_v4();
    info!(
        "Submission {submission_id} started for role '{}' (resume attached: {})",
        profile.target_role,
        profile.resume.is_some()
    );

    Ok(tokio::spawn(async move {
        let outcome = requester.request(&profile).await;

        match &outcome {
            Ok(roadmap) => info!(
                "Submission {submission_id} succeeded with {} phases",
                roadmap.phases.len()
            ),
            Err(e) => warn!("Submission {submission_id} failed: {e}"),
        }

        let mut guard = session.lock().await;
        match guard.complete_submission(outcome) {
            Ok(screen) => screen,
            Err(e) => {
                error!("Submission {submission_id} could not settle the session: {e}");
                guard.screen()
            }
        }
    }))
}
