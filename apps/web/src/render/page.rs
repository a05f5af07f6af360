//! Landing page markup.
//!
//! Styling uses Tailwind utility classes (loaded from the Tailwind Play CDN),
//! mirroring the class names of the product's original design.

use std::fmt::{self, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::careers::{self, Career, CareerReport};
use crate::chat::session::GREETING;
use crate::content::{self, Feature, TechStackEntry};
use crate::render::Tab;
use crate::skills::{self, radar, Skill, SkillReport};

const CHAT_SCRIPT: &str = include_str!("chat.js");

const SECTION: &str = "relative z-10 py-20 px-4 sm:px-6 lg:px-8";
const SECTION_TITLE: &str = "text-4xl font-bold text-white text-center mb-16";
const GLASS_CARD: &str = "bg-white/10 backdrop-blur-md rounded-2xl p-6 border border-white/20";

/// Renders the full landing page with `tab` selected in the demo panel.
pub fn render_landing_page(tab: Tab) -> String {
    let mut html = String::with_capacity(32 * 1024);
    // Writing into a String cannot fail.
    let _ = write_page(&mut html, tab);
    html
}

fn write_page(out: &mut String, tab: Tab) -> fmt::Result {
    write_head(out)?;
    writeln!(
        out,
        r#"<body class="min-h-screen bg-gradient-to-br from-indigo-900 via-purple-900 to-pink-900 relative overflow-x-hidden">"#
    )?;
    write_header(out)?;
    write_hero(out)?;
    write_features(out, content::FEATURES)?;
    write_demo(out, tab)?;
    write_flow(out, content::FLOW_STEPS)?;
    write_tech_stack(out, content::TECH_STACK)?;
    write_footer(out)?;
    if tab == Tab::Chatbot {
        writeln!(out, "<script>\n{CHAT_SCRIPT}</script>")?;
    }
    writeln!(out, "</body>\n</html>")
}

fn write_head(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta name="keywords" content="{keywords}">
<meta name="author" content="{author}">
<script src="https://cdn.tailwindcss.com"></script>
</head>"#,
        title = encode_text(content::PAGE_TITLE),
        description = encode_double_quoted_attribute(content::TAGLINE),
        keywords = encode_double_quoted_attribute(content::KEYWORDS),
        author = encode_double_quoted_attribute(content::AUTHOR),
    )
}

fn write_header(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        r#"<header class="relative z-10 bg-white/5 backdrop-blur-xl border-b border-white/10">
<div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex justify-between items-center py-4">
<a href="/" class="flex items-center space-x-2"><span class="w-10 h-10 bg-gradient-to-r from-cyan-400 to-blue-500 rounded-xl flex items-center justify-center shadow-lg">🤖</span><span class="text-3xl font-bold bg-gradient-to-r from-cyan-400 to-blue-400 bg-clip-text text-transparent">{name}</span></a>
<nav class="hidden md:flex space-x-8">"#,
        name = encode_text(content::PRODUCT_NAME),
    )?;
    for item in ["Features", "Demo", "About"] {
        writeln!(
            out,
            r##"<a href="#{anchor}" class="text-white/80 hover:text-white transition-colors duration-300">{item}</a>"##,
            anchor = item.to_ascii_lowercase(),
        )?;
    }
    writeln!(out, "</nav>\n</div>\n</header>")
}

fn write_hero(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        r##"<section class="{SECTION}">
<div class="max-w-7xl mx-auto text-center">
<h1 class="text-6xl md:text-8xl font-bold text-white mb-6">Personalized Career &amp; <span class="bg-gradient-to-r from-cyan-400 via-blue-400 to-purple-400 bg-clip-text text-transparent">Skills Advisor</span></h1>
<p class="text-xl text-white/90 mb-8 max-w-3xl mx-auto leading-relaxed">{tagline}</p>
<a href="#demo" class="inline-block bg-gradient-to-r from-cyan-500 via-blue-500 to-purple-600 text-white px-10 py-5 rounded-full text-lg font-semibold hover:scale-110 transition-all duration-300">Try Demo Now ›</a>
</div>
</section>"##,
        tagline = encode_text(content::TAGLINE),
    )
}

fn write_features(out: &mut String, features: &[Feature]) -> fmt::Result {
    writeln!(
        out,
        r#"<section id="features" class="{SECTION}">
<div class="max-w-7xl mx-auto">
<h2 class="{SECTION_TITLE}">Key Features</h2>
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">"#
    )?;
    for feature in features {
        writeln!(
            out,
            r#"<div class="group bg-white/5 backdrop-blur-xl rounded-3xl p-8 border border-white/10 hover:border-white/30 transition-all duration-500">
<div class="w-20 h-20 bg-gradient-to-r {color} rounded-3xl flex items-center justify-center mb-6 text-4xl shadow-lg">{icon}</div>
<h3 class="text-2xl font-bold text-white mb-4">{title}</h3>
<p class="text-white/80 leading-relaxed">{description}</p>
</div>"#,
            color = encode_double_quoted_attribute(feature.color),
            icon = feature.icon,
            title = encode_text(feature.title),
            description = encode_text(feature.description),
        )?;
    }
    writeln!(out, "</div>\n</div>\n</section>")
}

fn write_demo(out: &mut String, active: Tab) -> fmt::Result {
    writeln!(
        out,
        r#"<section id="demo" class="{SECTION}">
<div class="max-w-7xl mx-auto">
<h2 class="{SECTION_TITLE}">Interactive Demo</h2>
<div class="bg-white/5 backdrop-blur-xl rounded-3xl p-8 border border-white/10 shadow-2xl">
<nav class="flex flex-wrap justify-center gap-4 mb-8" aria-label="Demo tabs">"#
    )?;
    for tab in Tab::ALL {
        let class = if tab == active {
            "bg-gradient-to-r from-cyan-500 via-blue-500 to-purple-600 text-white shadow-xl"
        } else {
            "bg-white/5 text-white/70 hover:bg-white/10 hover:text-white border border-white/10"
        };
        let current = if tab == active {
            r#" aria-current="page""#
        } else {
            ""
        };
        writeln!(
            out,
            r##"<a href="/?tab={slug}#demo" data-tab="{slug}"{current} class="flex items-center space-x-2 px-8 py-4 rounded-full transition-all duration-500 {class}"><span>{icon}</span><span class="font-semibold">{label}</span></a>"##,
            slug = tab.slug(),
            icon = tab.icon(),
            label = tab.label(),
        )?;
    }
    writeln!(out, r#"</nav>
<div class="min-h-[500px]">"#)?;
    match active {
        Tab::Chatbot => write_chat_widget(out)?,
        Tab::Skills => write_skill_analysis(out, &skills::skill_report())?,
        Tab::Careers => write_career_paths(out, &careers::career_report())?,
    }
    writeln!(out, "</div>\n</div>\n</div>\n</section>")
}

// ────────────────────────────────────────────────────────────────────────────
// Demo widgets
// ────────────────────────────────────────────────────────────────────────────

fn write_chat_widget(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        r#"<div id="chat" class="h-full flex flex-col">
<div id="chat-messages" class="flex-1 overflow-y-auto max-h-96 p-4 space-y-4" aria-live="polite">
<div class="flex justify-start"><div class="px-4 py-3 rounded-2xl bg-white/20 text-white max-w-[80%]"><p class="text-sm leading-relaxed">{greeting}</p></div></div>
</div>
<div id="chat-thinking" class="px-4 text-white text-sm" hidden>Thinking...</div>
<div class="p-4 border-t border-white/20">
<p class="text-white/80 text-sm mb-3">Quick questions to get started:</p>
<div class="flex flex-wrap gap-2">"#,
        greeting = encode_text(GREETING),
    )?;
    for question in content::QUICK_QUESTIONS {
        writeln!(
            out,
            r#"<button type="button" data-question="{q}" class="bg-white/10 hover:bg-white/20 text-white text-xs px-3 py-2 rounded-full transition-all duration-300">{q}</button>"#,
            q = encode_double_quoted_attribute(question),
        )?;
    }
    writeln!(
        out,
        r#"</div>
</div>
<form id="chat-form" class="p-4 border-t border-white/20 flex space-x-3">
<input id="chat-input" type="text" autocomplete="off" placeholder="Ask about careers, skills, or job opportunities..." class="flex-1 bg-white/10 text-white placeholder-white/60 px-4 py-3 rounded-full border border-white/20 focus:outline-none focus:ring-2 focus:ring-blue-500">
<button id="chat-send" type="submit" class="bg-gradient-to-r from-blue-500 to-purple-600 text-white px-5 py-3 rounded-full disabled:opacity-50">Send</button>
</form>
<p id="chat-status" class="px-4 pb-3 text-sm text-red-300" role="alert" hidden></p>
</div>"#
    )
}

fn write_skill_analysis(out: &mut String, report: &SkillReport) -> fmt::Result {
    let chart = radar::layout(report.skills);
    writeln!(
        out,
        r#"<div class="h-full flex flex-col items-center justify-center p-8">
<h3 class="text-2xl font-bold text-white mb-8 text-center">Your Skill Gap Analysis</h3>
<div class="relative flex items-center justify-center">
{svg}<div class="absolute inset-0 flex items-center justify-center pointer-events-none"><div class="text-center"><p class="text-white/80 text-sm">Overall Score</p><p class="text-2xl font-bold text-white">{score}%</p></div></div>
</div>
<div class="grid grid-cols-2 md:grid-cols-3 gap-4 mt-8 w-full max-w-2xl">"#,
        svg = chart.to_svg(),
        score = report.overall_score,
    )?;
    for skill in report.skills {
        write_skill_card(out, skill)?;
    }
    writeln!(
        out,
        r#"</div>
<div class="mt-8 text-center">
<p class="text-white/80 text-sm mb-2">Focus areas for improvement:</p>
<div class="flex flex-wrap justify-center gap-2">"#
    )?;
    for area in &report.focus_areas {
        writeln!(
            out,
            r#"<span class="bg-gradient-to-r from-orange-500 to-red-500 text-white px-3 py-1 rounded-full text-xs font-semibold">{}</span>"#,
            encode_text(area)
        )?;
    }
    writeln!(out, "</div>\n</div>\n</div>")
}

fn write_skill_card(out: &mut String, skill: &Skill) -> fmt::Result {
    writeln!(
        out,
        r#"<div class="bg-white/10 backdrop-blur-sm rounded-lg p-4 border border-white/20">
<div class="flex items-center space-x-3 mb-2"><span class="w-8 h-8 bg-gradient-to-r {color} rounded-lg flex items-center justify-center">{icon}</span><span class="text-white font-semibold text-sm">{name}</span></div>
<div class="w-full bg-white/20 rounded-full h-2"><div class="h-2 bg-gradient-to-r {color} rounded-full" style="width: {level}%"></div></div>
<p class="text-white/80 text-xs mt-1">{level}%</p>
</div>"#,
        color = encode_double_quoted_attribute(skill.color),
        icon = skill.icon,
        name = encode_text(skill.name),
        level = skill.level,
    )
}

fn write_career_paths(out: &mut String, report: &CareerReport) -> fmt::Result {
    writeln!(
        out,
        r#"<div class="h-full p-6">
<h3 class="text-2xl font-bold text-white mb-8 text-center">Recommended Career Paths</h3>
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">"#
    )?;
    for career in report.careers {
        write_career_card(out, career)?;
    }
    writeln!(out, "</div>")?;

    let insights = &report.insights;
    let top = match (insights.top_title, insights.top_match) {
        (Some(title), Some(pct)) => format!("{} ({pct}% match)", encode_text(title)),
        _ => "None yet".to_string(),
    };
    writeln!(
        out,
        r#"<div class="mt-8 {GLASS_CARD}">
<h4 class="text-xl font-bold text-white mb-4 text-center">Career Insights</h4>
<div class="grid grid-cols-1 md:grid-cols-3 gap-6 text-center">
<div><h5 class="text-white font-semibold mb-1">High Match Careers</h5><p class="text-white/80 text-sm">{count} careers match {threshold}%+ of your skills</p></div>
<div><h5 class="text-white font-semibold mb-1">Growing Fields</h5><p class="text-white/80 text-sm">Tech roles growing {min}-{max}% annually</p></div>
<div><h5 class="text-white font-semibold mb-1">Top Recommendation</h5><p class="text-white/80 text-sm">{top}</p></div>
</div>
</div>
</div>"#,
        count = insights.high_match_count,
        threshold = careers::HIGH_MATCH_THRESHOLD,
        min = insights.growth_min_pct,
        max = insights.growth_max_pct,
    )
}

fn write_career_card(out: &mut String, career: &Career) -> fmt::Result {
    writeln!(
        out,
        r#"<article class="group {GLASS_CARD}">
<div class="flex items-start justify-between mb-4">
<div class="flex items-center space-x-3">
<span class="w-12 h-12 bg-gradient-to-r {color} rounded-xl flex items-center justify-center text-2xl">{icon}</span>
<div><h4 class="text-xl font-bold text-white">{title}</h4>
<div class="flex items-center space-x-2 mt-1"><span class="px-2 py-1 rounded-full text-xs font-semibold {badge}">{demand} Demand</span><span class="text-white/60 text-sm">{experience}</span></div></div>
</div>
<div class="text-right"><div class="text-2xl font-bold text-white">{pct}%</div><div class="text-xs text-white/60">Match</div></div>
</div>
<p class="text-white/80 text-sm mb-4 leading-relaxed">{description}</p>
<div class="grid grid-cols-2 gap-4 mb-4">
<div><p class="text-white/60 text-xs">Salary</p><p class="text-white font-semibold text-sm">{salary}</p></div>
<div><p class="text-white/60 text-xs">Growth</p><p class="text-white font-semibold text-sm">{growth}</p></div>
</div>
<p class="text-white/60 text-xs mb-2">Key Skills Required:</p>
<div class="flex flex-wrap gap-1 mb-4">"#,
        color = encode_double_quoted_attribute(career.color),
        icon = career.icon,
        title = encode_text(career.title),
        badge = career.demand.badge_class(),
        demand = career.demand.label(),
        experience = encode_text(career.experience),
        pct = career.match_pct,
        description = encode_text(career.description),
        salary = encode_text(career.salary),
        growth = encode_text(career.growth),
    )?;
    for skill in career.skills {
        writeln!(
            out,
            r#"<span class="bg-white/20 text-white text-xs px-2 py-1 rounded-full">{}</span>"#,
            encode_text(skill)
        )?;
    }
    writeln!(
        out,
        r#"</div>
<div class="flex justify-between items-center mb-2"><span class="text-white/60 text-xs">Match Score</span><span class="text-white text-xs font-semibold">{pct}%</span></div>
<div class="w-full bg-white/20 rounded-full h-2 mb-4"><div class="h-2 bg-gradient-to-r {color} rounded-full" style="width: {pct}%"></div></div>
</article>"#,
        pct = career.match_pct,
        color = encode_double_quoted_attribute(career.color),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Remaining page sections
// ────────────────────────────────────────────────────────────────────────────

fn write_flow(out: &mut String, steps: &[&str]) -> fmt::Result {
    writeln!(
        out,
        r#"<section class="{SECTION}">
<div class="max-w-7xl mx-auto">
<h2 class="{SECTION_TITLE}">How It Works</h2>
<ol class="flex flex-wrap justify-center items-center gap-4">"#
    )?;
    for step in steps {
        writeln!(
            out,
            r#"<li class="bg-gradient-to-r from-blue-500 to-purple-600 text-white px-6 py-4 rounded-full font-semibold shadow-lg">{}</li>"#,
            encode_text(step)
        )?;
    }
    writeln!(out, "</ol>\n</div>\n</section>")
}

fn write_tech_stack(out: &mut String, stack: &[TechStackEntry]) -> fmt::Result {
    writeln!(
        out,
        r#"<section id="about" class="{SECTION}">
<div class="max-w-7xl mx-auto">
<h2 class="{SECTION_TITLE}">Technology Stack</h2>
<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-5 gap-6">"#
    )?;
    for entry in stack {
        writeln!(
            out,
            r#"<div class="{GLASS_CARD} text-center"><div class="text-4xl mb-4">{icon}</div><h3 class="text-xl font-bold text-white mb-2">{name}</h3><p class="text-white/80 text-sm">{tech}</p></div>"#,
            icon = entry.icon,
            name = encode_text(entry.name),
            tech = encode_text(entry.tech),
        )?;
    }
    writeln!(out, "</div>\n</div>\n</section>")
}

fn write_footer(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        r#"<footer class="relative z-10 bg-black/20 backdrop-blur-md border-t border-white/20 py-12 px-4 text-center">
<p class="text-2xl font-bold text-white mb-4">{name}</p>
<p class="text-white/80 mb-2">© 2024 {author}. All rights reserved.</p>
<p class="text-white/60">Personalized Career &amp; Skills Advisor - Hackathon MVP</p>
</footer>"#,
        name = encode_text(content::PRODUCT_NAME),
        author = encode_text(content::AUTHOR),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_all_sections() {
        let html = render_landing_page(Tab::Chatbot);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>VisionAI - Personalized Career &amp; Skills Advisor</title>"));
        for heading in ["Key Features", "Interactive Demo", "How It Works", "Technology Stack"] {
            assert!(html.contains(heading), "missing {heading}");
        }
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_chat_tab_renders_widget_and_script() {
        let html = render_landing_page(Tab::Chatbot);
        assert!(html.contains(r#"id="chat-form""#));
        assert!(html.contains(r#"id="chat-status""#));
        assert!(html.contains("Hi! I'm your AI career advisor."));
        assert_eq!(html.matches("data-question=").count(), 6);
        assert!(html.contains("/api/v1/chat/sessions"));
        assert!(html.contains(r#"data-tab="chatbot" aria-current="page""#));
    }

    #[test]
    fn test_skills_tab_renders_radar() {
        let html = render_landing_page(Tab::Skills);
        assert!(html.contains("Your Skill Gap Analysis"));
        assert!(html.contains("<svg"));
        assert!(html.contains(">76%</p>"));
        assert!(!html.contains(r#"id="chat-form""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_skill_card_escapes_markup() {
        let skill = Skill {
            name: "<b>R&D</b>",
            color: "from-\"x",
            ..crate::skills::SKILLS[0]
        };
        let mut html = String::new();
        write_skill_card(&mut html, &skill).unwrap();
        assert!(html.contains("&lt;b&gt;R&amp;D&lt;/b&gt;"));
        assert!(html.contains("from-&quot;x"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn test_careers_tab_renders_cards_and_insights() {
        let html = render_landing_page(Tab::Careers);
        assert_eq!(html.matches("<article").count(), 6);
        assert!(html.contains("4 careers match 80%+ of your skills"));
        assert!(html.contains("Tech roles growing 15-35% annually"));
        assert!(html.contains("Software Engineer (92% match)"));
        assert!(html.contains("UX/UI Designer"));
    }
}
