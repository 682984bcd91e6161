//! The five non-report screens.

use crate::profile::{Profile, ProfileField};
use crate::render::{escape, page, panel, PanelVariant};

/// Seconds between polls while a roadmap is being generated.
const LOADING_REFRESH_SECS: u32 = 2;

pub fn render_landing() -> String {
    let intro = format!(
        r#"<div style="display:grid;grid-template-columns:1fr 1fr;gap:2rem">{}{}</div>"#,
        panel(
            PanelVariant::Cyan,
            None,
            "<h3>Identify Your Origin</h3><p>Upload your resume to analyze your current stats and abilities.</p>",
        ),
        panel(
            PanelVariant::Magenta,
            None,
            "<h3>Choose Your Mission</h3><p>Target a role and defeat the skill gaps standing in your way.</p>",
        ),
    );

    let body = format!(
        r#"<div style="text-align:center">
<h1 style="font-size:6rem">HERO<span style="color:var(--magenta)">PATH</span></h1>
<h2 class="bubble" style="display:inline-block;background:var(--yellow)">Forge Your Tech Destiny!</h2>
</div>
{intro}
<form method="post" action="/start" style="text-align:center">
<button class="button" type="submit">Start Your Journey</button>
</form>"#
    );

    page("Forge Your Tech Destiny", "", &body)
}

fn text_input(profile: &Profile, field: ProfileField, label: &str, placeholder: &str) -> String {
    format!(
        r#"<label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" placeholder="{placeholder}" value="{value}">"#,
        name = field.form_name(),
        label = escape(label),
        placeholder = escape(placeholder),
        value = escape(profile.field(field)),
    )
}

fn notice_banner(notice: Option<&str>) -> String {
    notice
        .map(|n| format!(r#"<p class="notice" role="alert">{}</p>"#, escape(n)))
        .unwrap_or_default()
}

pub fn render_details(profile: &Profile, notice: Option<&str>) -> String {
    let notice = notice_banner(notice);

    let form = format!(
        r#"{notice}
<form method="post" action="/details">
{name}
{role}
{location}
<label for="passionProblem">The Problem You Must Solve (Your Passion)</label>
<textarea id="passionProblem" name="passionProblem" rows="3" placeholder="What keeps you up at night? e.g., 'Financial literacy for teens' or 'Sustainable food supply'">{passion}</textarea>
<div class="actions">
<button class="button button-secondary" type="submit" name="action" value="back">Back</button>
<button class="button" type="submit" name="action" value="next">Next Step</button>
</div>
</form>"#,
        name = text_input(profile, ProfileField::Name, "Hero Name", "e.g. Alex Chen"),
        role = text_input(
            profile,
            ProfileField::TargetRole,
            "Target Role",
            "e.g. Senior PM, AI Engineer"
        ),
        location = text_input(
            profile,
            ProfileField::TargetLocation,
            "Target Location",
            "e.g. London, NYC, Remote"
        ),
        passion = escape(&profile.passion_problem),
    );

    page(
        "Mission Parameters",
        "",
        &panel(PanelVariant::White, Some("Mission Parameters"), &form),
    )
}

pub fn render_resume(profile: &Profile, notice: Option<&str>) -> String {
    let notice = notice_banner(notice);
    let attached = profile
        .resume
        .as_ref()
        .map(|r| {
            format!(
                r#"<p class="chip" style="background:var(--cyan)">{}</p>
<button class="button button-secondary" type="submit" name="action" value="remove">Remove</button>"#,
                escape(&r.file_name)
            )
        })
        .unwrap_or_default();

    let form = format!(
        r#"{notice}
<form method="post" action="/resume" enctype="multipart/form-data">
<div style="border:4px dashed var(--ink);background:#fff;padding:2rem;text-align:center">
<h3>Upload Resume / CV</h3>
<p>PDF, TXT, or MD supported</p>
<input type="file" name="resume" accept=".pdf,.txt,.md">
{attached}
</div>
{github}
{portfolio}
<div class="actions">
<button class="button button-secondary" type="submit" name="action" value="back">Back</button>
<button class="button button-success" type="submit" name="action" value="generate">Generate Roadmap!</button>
</div>
</form>"#,
        github = text_input(
            profile,
            ProfileField::GithubLink,
            "GitHub Link (Optional)",
            "https://github.com/..."
        ),
        portfolio = text_input(
            profile,
            ProfileField::PortfolioLink,
            "Portfolio Link (Optional)",
            "https://..."
        ),
    );

    page(
        "Equipment Check",
        "",
        &panel(PanelVariant::Yellow, Some("Equipment Check"), &form),
    )
}

pub fn render_loading() -> String {
    let refresh = format!(r#"<meta http-equiv="refresh" content="{LOADING_REFRESH_SECS}">"#);
    page(
        "Consulting the Oracle",
        &refresh,
        r#"<div style="text-align:center;padding-top:6rem">
<h2 style="font-size:2.5rem">Consulting the Oracle...</h2>
<p>Our AI sidekicks are analyzing your stats and preparing your battle plan. Hang tight, hero!</p>
</div>"#,
    )
}

pub fn render_error(message: &str) -> String {
    let body = format!(
        r#"<div style="text-align:center;padding-top:4rem">
<h2 style="font-size:2.5rem">Mission Aborted!</h2>
<p class="notice">{}</p>
<form method="post" action="/retry"><button class="button" type="submit">Try Again</button></form>
</div>"#,
        escape(message)
    );
    page("Mission Aborted", "", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ResumeAttachment;
    use crate::test_support::ready_profile;

    #[test]
    fn test_details_prefills_and_escapes_fields() {
        let mut profile = ready_profile();
        profile.set_field(ProfileField::PassionProblem, "<b>teens</b> & money");

        let html = render_details(&profile, None);
        assert!(html.contains(r#"name="name" placeholder="e.g. Alex Chen" value="Alex Chen""#));
        assert!(html.contains("&lt;b&gt;teens&lt;/b&gt; &amp; money</textarea>"));
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn test_details_shows_pending_notice() {
        let html = render_details(
            &Profile::default(),
            Some("Identify yourself and your mission first!"),
        );
        assert!(html.contains("Identify yourself and your mission first!"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn test_resume_screen_shows_attached_file_name() {
        let mut profile = ready_profile();
        assert!(!render_resume(&profile, None).contains("my-cv.pdf"));

        profile.attach(ResumeAttachment {
            file_name: "my-cv.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            payload: "JVBERg==".to_string(),
        });
        let html = render_resume(&profile, None);
        assert!(html.contains("my-cv.pdf"));
        assert!(html.contains(r#"value="remove""#));
        assert!(html.contains(r#"accept=".pdf,.txt,.md""#));
        assert!(html.contains(r#"enctype="multipart/form-data""#));
        assert!(!html.contains("class=\"notice\""));
    }

    #[test]
    fn test_resume_screen_shows_pending_notice() {
        let html = render_resume(&ready_profile(), Some("'blank.pdf' is empty"));
        assert!(html.contains(
            r#"<p class="notice" role="alert">&#39;blank.pdf&#39; is empty</p>"#
        ));
    }

    #[test]
    fn test_loading_page_refreshes() {
        assert!(render_loading().contains(r#"http-equiv="refresh" content="2""#));
    }

    #[test]
    fn test_error_page_offers_retry() {
        let html = render_error("The Oracle is momentarily offline (API Error). Try again!");
        assert!(html.contains("The Oracle is momentarily offline (API Error). Try again!"));
        assert!(html.contains(r#"action="/retry""#));
    }
}
