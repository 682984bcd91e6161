// Prompt constants for roadmap generation.
// The output shape itself is enforced by `schema::roadmap_schema`, not by prose.

use crate::profile::Profile;

/// Roadmap instruction template.
/// Replace: {name}, {target_role}, {target_location}, {github_link},
///          {portfolio_link}, {passion_problem}
pub const ROADMAP_PROMPT_TEMPLATE: &str = r#"You are an expert tech career coach with a flair for dramatic, comic-book style storytelling.

User Context:
- Name: {name}
- Target Role: {target_role}
- Location context: {target_location}
- GitHub: {github_link}
- Portfolio: {portfolio_link}
- A core problem they want to solve (Passion): "{passion_problem}"

Task:
Analyze the provided resume (if any) and the context above.
Create a detailed, step-by-step career roadmap to get them to the Target Role.

Specific Requirements:
1. "Super Weapon Project": Design a unique, high-impact project idea that solves their "Passion" problem using tech relevant to the Target Role. This should be the centerpiece of their portfolio.
2. "Local Context Tip": Give advice specific to their location ({target_location}) regarding the tech scene, hubs, or cultural expectations if known (e.g. if London, mention fintech; if SF, mention AI startups).
3. "The Villain": Identify the main skill gaps or obstacles they face.
4. "Phases": Break the journey into 3-4 distinct phases (e.g., Training, Building, Networking, Applying). Each phase needs a duration, a description, concrete action items and the skills it focuses on.

Return ONLY raw JSON complying with the specified schema."#;

/// Fills the template with the profile's text fields.
pub fn build_roadmap_prompt(profile: &Profile) -> String {
    fill_template(
        ROADMAP_PROMPT_TEMPLATE,
        &[
            ("name", &profile.name),
            ("target_role", &profile.target_role),
            ("target_location", &profile.target_location),
            ("github_link", &profile.github_link),
            ("portfolio_link", &profile.portfolio_link),
            ("passion_problem", &profile.passion_problem),
        ],
    )
}

/// Single-pass substitution of `{key}` placeholders. Substituted values are never
/// rescanned, so user text that happens to contain `{name}` stays literal.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
