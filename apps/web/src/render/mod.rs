// Server-side rendering of the landing page.
// Markup is assembled with `write!` into a String; dynamic strings go through html_escape.

pub mod page;

pub use page::render_landing_page;

/// Which demo widget the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Chatbot,
    Skills,
    Careers,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Chatbot, Tab::Skills, Tab::Careers];

    /// Reads a `?tab=` value. Anything unrecognised selects the chatbot.
    pub fn parse(raw: Option<&str>) -> Tab {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("skills") => Tab::Skills,
            Some("careers") => Tab::Careers,
            _ => Tab::Chatbot,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Tab::Chatbot => "chatbot",
            Tab::Skills => "skills",
            Tab::Careers => "careers",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Chatbot => "AI Chatbot",
            Tab::Skills => "Skill Analysis",
            Tab::Careers => "Career Paths",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tab::Chatbot => "🤖",
            Tab::Skills => "📡",
            Tab::Careers => "🧭",
        }
    }
}
