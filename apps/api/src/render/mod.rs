// Server-side HTML for the wizard. One function per screen; all dynamic text
// goes through `escape`.

pub mod report;
pub mod screens;

use std::fmt::Write;

pub use report::render_result;
pub use screens::{render_details, render_error, render_landing, render_loading, render_resume};

use crate::wizard::{Screen, Session};

const STYLESHEET: &str = r#"
:root { --ink:#111; --paper:#fffdf5; --yellow:#ffe14d; --cyan:#4de1ff; --magenta:#ff3da8; }
body { margin:0; background:var(--paper); color:var(--ink); font-family:"Comic Neue","Comic Sans MS",cursive; }
main { max-width:72rem; margin:0 auto; padding:2rem 1rem 5rem; }
h1, h2, h3, h4 { font-family:Bangers,Impact,sans-serif; letter-spacing:.04em; margin:.2em 0; }
.panel { position:relative; border:4px solid var(--ink); box-shadow:6px 6px 0 var(--ink); padding:1.5rem; margin:2.5rem 0 1.5rem; }
.panel-title { position:absolute; top:-1.4rem; left:1rem; background:var(--magenta); color:#fff; border:4px solid var(--ink); padding:.1rem 1rem; transform:rotate(-2deg); text-transform:uppercase; }
.panel-white { background:var(--paper); } .panel-yellow { background:var(--yellow); }
.panel-cyan { background:var(--cyan); } .panel-magenta { background:var(--magenta); color:#fff; }
.button { font:inherit; font-weight:bold; font-size:1.2rem; border:4px solid var(--ink); box-shadow:4px 4px 0 var(--ink); padding:.6rem 1.5rem; cursor:pointer; background:var(--yellow); }
.button-secondary { background:#fff; } .button-success { background:#5fe37a; }
label { display:block; font-weight:bold; margin:.8rem 0 .2rem; }
input[type=text], input[type=url], textarea { width:100%; box-sizing:border-box; font:inherit; border:3px solid var(--ink); padding:.5rem; }
.actions { display:flex; justify-content:space-between; margin-top:1.5rem; }
.notice { background:#fff; border:3px solid #d22; color:#d22; padding:.8rem; font-weight:bold; }
.chip { display:inline-block; border:2px solid var(--ink); padding:.1rem .5rem; margin:.2rem; background:#eee; }
.chip-dark { background:var(--ink); color:#fff; }
.timeline { border-left:8px solid var(--ink); margin-left:1rem; padding-left:2rem; list-style:none; }
.phase-number { display:inline-block; width:2.5rem; height:2.5rem; line-height:2.5rem; text-align:center; border:4px solid var(--ink); border-radius:50%; background:var(--yellow); margin-left:-3.6rem; }
.bubble { background:#fff; border:4px solid var(--ink); border-radius:1.5rem; padding:1rem 1.5rem; }
"#;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub enum PanelVariant {
    White,
    Yellow,
    Cyan,
    Magenta,
}

impl PanelVariant {
    fn class(self) -> &'static str {
        match self {
            PanelVariant::White => "panel-white",
            PanelVariant::Yellow => "panel-yellow",
            PanelVariant::Cyan => "panel-cyan",
            PanelVariant::Magenta => "panel-magenta",
        }
    }
}

/// A bordered comic panel. `body` must already be HTML.
pub fn panel(variant: PanelVariant, title: Option<&str>, body: &str) -> String {
    let mut out = format!(r#"<section class="panel {}">"#, variant.class());
    if let Some(title) = title {
        let _ = write!(out, r#"<h3 class="panel-title">{}</h3>"#, escape(title));
    }
    out.push_str(body);
    out.push_str("</section>");
    out
}

/// Wraps a screen body in the full document.
pub fn page(title: &str, head_extra: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | HeroPath</title>
{head_extra}
<style>{STYLESHEET}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
    )
}

/// Renders whichever screen the session is on.
pub fn render_session(session: &Session) -> String {
    match session.screen() {
        Screen::Landing => render_landing(),
        Screen::Details => render_details(session.profile(), session.notice()),
        Screen::Resume => render_resume(session.profile(), session.notice()),
        Screen::Loading => render_loading(),
        Screen::Error => render_error(session.error().unwrap_or_default()),
        Screen::Result => match session.roadmap() {
            Some(roadmap) => render_result(session.profile(), roadmap),
            None => render_landing(),
        },
    }
}
