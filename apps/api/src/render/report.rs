//! The Result screen: a roadmap laid out as a comic issue.
//!
//! Left column: origin, villain, local intel, super weapon.
//! Right column: one numbered timeline entry per phase, in the order returned.

use std::fmt::Write;

use crate::profile::Profile;
use crate::render::{escape, page, panel, PanelVariant};
use crate::roadmap::{Roadmap, RoadmapPhase};

fn chips(items: &[String], class: &str) -> String {
    items
        .iter()
        .map(|item| format!(r#"<span class="{class}">{}</span>"#, escape(item)))
        .collect()
}

fn render_phase(index: usize, phase: &RoadmapPhase) -> String {
    let actions: String = phase
        .action_items
        .iter()
        .map(|item| format!("<li>{}</li>", escape(item)))
        .collect();

    let body = format!(
        r#"<div style="display:flex;justify-content:space-between;border-bottom:2px solid var(--ink)">
<h3>{title}</h3><span class="chip chip-dark">{duration}</span>
</div>
<p>{description}</p>
<h4>Actions</h4>
<ul>{actions}</ul>
<h4>Skills</h4>
<div>{skills}</div>"#,
        title = escape(&phase.title),
        duration = escape(&phase.duration),
        description = escape(&phase.description),
        skills = chips(&phase.skill_focus, "chip"),
    );

    format!(
        r#"<li class="phase" data-phase="{number}"><span class="phase-number">{number}</span>{panel}</li>"#,
        number = index + 1,
        panel = panel(PanelVariant::White, None, &body),
    )
}

fn render_phases(phases: &[RoadmapPhase]) -> String {
    if phases.is_empty() {
        return panel(
            PanelVariant::White,
            Some("Mission Plan"),
            "<p>The Oracle did not chart any phases this time. Start a new mission to try again.</p>",
        );
    }

    let mut out = String::from(r#"<ol class="timeline">"#);
    for (index, phase) in phases.iter().enumerate() {
        out.push_str(&render_phase(index, phase));
    }
    out.push_str("</ol>");
    out
}

pub fn render_result(profile: &Profile, roadmap: &Roadmap) -> String {
    let weapon = &roadmap.super_weapon_project;

    let mut left = String::new();
    left.push_str(&panel(
        PanelVariant::White,
        Some("Origin Story"),
        &format!("<p>{}</p>", escape(&roadmap.hero_origin)),
    ));
    left.push_str(&panel(
        PanelVariant::Yellow,
        Some("Mission Objective"),
        &format!("<p>{}</p>", escape(&roadmap.mission_objective)),
    ));
    left.push_str(&panel(
        PanelVariant::Magenta,
        Some("The Villain (Gaps)"),
        &format!("<p>{}</p>", escape(&roadmap.the_villain)),
    ));
    left.push_str(&panel(
        PanelVariant::Cyan,
        Some("Local Intel"),
        &format!("<p>{}</p>", escape(&roadmap.local_context_tip)),
    ));
    left.push_str(&panel(
        PanelVariant::Yellow,
        Some("Super Weapon"),
        &format!(
            r#"<h4>{title}</h4><p>{description}</p>
<div style="background:#fff;border:2px solid var(--ink);padding:.8rem">
<p><strong>IMPACT DAMAGE:</strong></p><p><em>{impact}</em></p>
</div>
<div>{stack}</div>"#,
            title = escape(&weapon.title),
            description = escape(&weapon.description),
            impact = escape(&weapon.impact),
            stack = chips(&weapon.tech_stack, "chip chip-dark"),
        ),
    ));

    let mut right = String::new();
    let _ = write!(
        right,
        r#"<p class="bubble">Listen up, hero! Here is your mission plan to conquer the {} role. Follow it precisely!</p>"#,
        escape(&profile.target_role)
    );
    right.push_str(&render_phases(&roadmap.phases));
    right.push_str(
        r#"<form method="post" action="/restart" style="text-align:center">
<button class="button button-success" type="submit">Mission Complete? Start New.</button>
</form>"#,
    );

    let body = format!(
        r#"<header class="panel panel-white">
<h1>The Saga of {name}</h1>
<p>Target: {role} @ {location}</p>
</header>
<div style="display:grid;grid-template-columns:1fr 2fr;gap:2rem">
<div>{left}</div>
<div>{right}</div>
</div>"#,
        name = escape(&profile.name),
        role = escape(&profile.target_role),
        location = escape(&profile.target_location),
    );

    page(&format!("The Saga of {}", profile.name), "", &body)
}
