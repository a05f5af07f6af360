// Career recommendation demo. Match percentages are display literals,
// there is no matching algorithm behind them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Demand {
    High,
    Medium,
    #[allow(dead_code)]
    Low,
}

impl Demand {
    pub fn label(self) -> &'static str {
        match self {
            Demand::High => "High",
            Demand::Medium => "Medium",
            Demand::Low => "Low",
        }
    }

    /// Badge classes for the demand pill.
    pub fn badge_class(self) -> &'static str {
        match self {
            Demand::High => "text-green-400 bg-green-500/20",
            Demand::Medium => "text-yellow-400 bg-yellow-500/20",
            Demand::Low => "text-red-400 bg-red-500/20",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Career {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "match")]
    pub match_pct: u8,
    pub salary: &'static str,
    /// Annual growth, e.g. "+22%".
    pub growth: &'static str,
    pub skills: &'static [&'static str],
    pub icon: &'static str,
    pub color: &'static str,
    pub demand: Demand,
    pub experience: &'static str,
}

pub const CAREERS: &[Career] = &[
    Career {
        id: "1",
        title: "Software Engineer",
        description: "Design, develop, and maintain software applications. High demand with excellent growth potential.",
        match_pct: 92,
        salary: "$70k - $150k",
        growth: "+22%",
        skills: &["Programming", "Problem Solving", "Analytics"],
        icon: "💻",
        color: "from-blue-500 to-cyan-500",
        demand: Demand::High,
        experience: "0-2 years",
    },
    Career {
        id: "2",
        title: "Product Manager",
        description: "Lead product strategy and development. Combines technical knowledge with leadership skills.",
        match_pct: 88,
        salary: "$80k - $200k",
        growth: "+18%",
        skills: &["Leadership", "Communication", "Analytics"],
        icon: "💼",
        color: "from-purple-500 to-pink-500",
        demand: Demand::High,
        experience: "2-5 years",
    },
    Career {
        id: "3",
        title: "Data Scientist",
        description: "Analyze complex data to help organizations make informed decisions. Growing field with excellent opportunities.",
        match_pct: 85,
        salary: "$75k - $160k",
        growth: "+35%",
        skills: &["Analytics", "Problem Solving", "Programming"],
        icon: "📊",
        color: "from-green-500 to-emerald-500",
        demand: Demand::High,
        experience: "1-3 years",
    },
    Career {
        id: "4",
        title: "Tech Consultant",
        description: "Help businesses implement technology solutions. Leverage your problem-solving skills in various industries.",
        match_pct: 78,
        salary: "$65k - $140k",
        growth: "+15%",
        skills: &["Communication", "Problem Solving", "Innovation"],
        icon: "👥",
        color: "from-orange-500 to-red-500",
        demand: Demand::Medium,
        experience: "2-4 years",
    },
    Career {
        id: "5",
        title: "DevOps Engineer",
        description: "Bridge development and operations. Focus on automation and infrastructure management.",
        match_pct: 82,
        salary: "$80k - $170k",
        growth: "+25%",
        skills: &["Programming", "Analytics", "Innovation"],
        icon: "📈",
        color: "from-indigo-500 to-purple-500",
        demand: Demand::High,
        experience: "1-3 years",
    },
    Career {
        id: "6",
        title: "UX/UI Designer",
        description: "Create user-friendly digital experiences. Combine creativity with technical understanding.",
        match_pct: 75,
        salary: "$60k - $130k",
        growth: "+20%",
        skills: &["Innovation", "Communication", "Analytics"],
        icon: "⭐",
        color: "from-pink-500 to-rose-500",
        demand: Demand::Medium,
        experience: "0-2 years",
    },
];

/// Careers at or above this match count as "high match".
pub const HIGH_MATCH_THRESHOLD: u8 = 80;

/// Summary figures shown under the career cards.
#[derive(Debug, Clone, Serialize)]
pub struct CareerInsights {
    pub high_match_count: usize,
    pub growth_min_pct: u8,
    pub growth_max_pct: u8,
    pub top_title: Option<&'static str>,
    pub top_match: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CareerReport {
    pub careers: &'static [Career],
    pub insights: CareerInsights,
}

/// Parses "+22%" style growth figures. Anything unparseable reads as 0.
fn growth_pct(growth: &str) -> u8 {
    growth
        .trim()
        .trim_start_matches('+')
        .trim_end_matches('%')
        .parse()
        .unwrap_or(0)
}

pub fn insights(careers: &[Career]) -> CareerInsights {
    let growth: Vec<u8> = careers.iter().map(|c| growth_pct(c.growth)).collect();
    // First career wins ties for the top spot.
    let top = careers
        .iter()
        .fold(None::<&Career>, |best, c| match best {
            Some(b) if b.match_pct >= c.match_pct => Some(b),
            _ => Some(c),
        });

    CareerInsights {
        high_match_count: careers
            .iter()
            .filter(|c| c.match_pct >= HIGH_MATCH_THRESHOLD)
            .count(),
        growth_min_pct: growth.iter().copied().min().unwrap_or(0),
        growth_max_pct: growth.iter().copied().max().unwrap_or(0),
        top_title: top.map(|c| c.title),
        top_match: top.map(|c| c.match_pct),
    }
}

pub fn career_report() -> CareerReport {
    CareerReport {
        careers: CAREERS,
        insights: insights(CAREERS),
    }
}
