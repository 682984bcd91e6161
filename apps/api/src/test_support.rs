//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::llm_client::LlmError;
use crate::profile::{Profile, ProfileField};
use crate::roadmap::models::SuperWeaponProject;
use crate::roadmap::requester::parse_roadmap;
use crate::roadmap::{RequestError, Roadmap, RoadmapPhase, RoadmapRequester};

pub fn sample_roadmap(phase_titles: &[&str]) -> Roadmap {
    Roadmap {
        hero_origin: "A self-taught web developer with a knack for data.".to_string(),
        mission_objective: "AI Engineers ship models, not notebooks.".to_string(),
        the_villain: "No production ML experience.".to_string(),
        local_context_tip: "London's fintech scene is hiring ML engineers.".to_string(),
        super_weapon_project: SuperWeaponProject {
            title: "PocketMoney Sensei".to_string(),
            description: "A budgeting coach for teens.".to_string(),
            tech_stack: vec!["Rust".to_string(), "PyTorch".to_string()],
            impact: "Teaches teens to save.".to_string(),
        },
        phases: phase_titles
            .iter()
            .map(|title| RoadmapPhase {
                title: title.to_string(),
                duration: "4 weeks".to_string(),
                description: format!("{title} description"),
                action_items: vec![format!("{title} action")],
                skill_focus: vec![format!("{title} skill")],
            })
            .collect(),
    }
}

pub fn ready_profile() -> Profile {
    let mut profile = Profile::default();
    profile.set_field(ProfileField::Name, "Alex Chen");
    profile.set_field(ProfileField::TargetRole, "AI Engineer");
    profile.set_field(ProfileField::TargetLocation, "London");
    profile
}

#[derive(Clone, Copy)]
pub enum StubFailure {
    Network,
    Malformed,
}

enum StubOutcome {
    Success(Roadmap),
    Failure(StubFailure),
}

/// Deterministic requester. Records every profile it is asked about and can be
/// held pending until `release()` is called.
pub struct StubRequester {
    outcome: StubOutcome,
    calls: AtomicUsize,
    seen: Mutex<Vec<Profile>>,
    gate: Option<Arc<Notify>>,
}

impl StubRequester {
    pub fn succeeding(roadmap: Roadmap) -> Self {
        Self::with_outcome(StubOutcome::Success(roadmap))
    }

    pub fn failing(failure: StubFailure) -> Self {
        Self::with_outcome(StubOutcome::Failure(failure))
    }

    fn with_outcome(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Blocks every request until the returned handle is notified.
    pub fn gated(mut self) -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        self.gate = Some(gate.clone());
        (self, gate)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Profile> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoadmapRequester for StubRequester {
    async fn request(&self, profile: &Profile) -> Result<Roadmap, RequestError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(profile.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            StubOutcome::Success(roadmap) => Ok(roadmap.clone()),
            StubOutcome::Failure(StubFailure::Network) => {
                Err(RequestError::Service(LlmError::Api {
                    status: 503,
                    message: "simulated network failure".to_string(),
                }))
            }
            StubOutcome::Failure(StubFailure::Malformed) => {
                Err(parse_roadmap("{ not json").unwrap_err())
            }
        }
    }
}
