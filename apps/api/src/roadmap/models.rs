use serde::{Deserialize, Serialize};

/// The structured career roadmap returned by one successful generation.
///
/// Every field must be present in the model output. `phases` is normally 3–4
/// entries long, but any length (including zero) is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Where the user is starting from.
    pub hero_origin: String,
    /// What it takes to land the target role.
    pub mission_objective: String,
    /// Main gaps and obstacles.
    pub the_villain: String,
    /// Advice specific to the target location.
    pub local_context_tip: String,
    pub super_weapon_project: SuperWeaponProject,
    pub phases: Vec<RoadmapPhase>,
}

/// The capstone portfolio project tied to the user's passion problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperWeaponProject {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapPhase {
    pub title: String,
    pub duration: String,
    pub description: String,
    pub action_items: Vec<String>,
    pub skill_focus: Vec<String>,
}
