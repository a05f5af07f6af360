// Skill gap demo: fixed skill levels and the radar chart drawn from them.
// Levels are display literals, not an assessment.

pub mod radar;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// 0 – 100
    pub level: u8,
    pub icon: &'static str,
    /// Tailwind gradient classes for the skill's card.
    pub color: &'static str,
    /// The same gradient as hex stops, for SVG.
    pub stops: [&'static str; 2],
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "Programming",
        level: 85,
        icon: "💻",
        color: "from-blue-500 to-cyan-500",
        stops: ["#3B82F6", "#06B6D4"],
    },
    Skill {
        name: "Communication",
        level: 70,
        icon: "👥",
        color: "from-green-500 to-emerald-500",
        stops: ["#22C55E", "#10B981"],
    },
    Skill {
        name: "Leadership",
        level: 60,
        icon: "🎯",
        color: "from-purple-500 to-pink-500",
        stops: ["#A855F7", "#EC4899"],
    },
    Skill {
        name: "Problem Solving",
        level: 90,
        icon: "🧠",
        color: "from-orange-500 to-red-500",
        stops: ["#F97316", "#EF4444"],
    },
    Skill {
        name: "Analytics",
        level: 75,
        icon: "📈",
        color: "from-yellow-500 to-orange-500",
        stops: ["#EAB308", "#F97316"],
    },
    Skill {
        name: "Innovation",
        level: 80,
        icon: "⚡",
        color: "from-indigo-500 to-purple-500",
        stops: ["#6366F1", "#A855F7"],
    },
];

/// How many of the weakest skills are called out as focus areas.
pub const FOCUS_AREA_COUNT: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct SkillReport {
    pub skills: &'static [Skill],
    pub overall_score: u8,
    pub focus_areas: Vec<&'static str>,
}

/// Integer mean of all levels (truncated). Zero for an empty slice.
pub fn overall_score(skills: &[Skill]) -> u8 {
    if skills.is_empty() {
        return 0;
    }
    let total: u32 = skills.iter().map(|s| s.level as u32).sum();
    (total / skills.len() as u32) as u8
}

/// The `count` lowest-level skills, weakest first. Ties keep declaration order.
pub fn focus_areas(skills: &[Skill], count: usize) -> Vec<&'static str> {
    let mut ranked: Vec<&Skill> = skills.iter().collect();
    ranked.sort_by_key(|s| s.level);
    ranked.into_iter().take(count).map(|s| s.name).collect()
}

pub fn skill_report() -> SkillReport {
    SkillReport {
        skills: SKILLS,
        overall_score: overall_score(SKILLS),
        focus_areas: focus_areas(SKILLS, FOCUS_AREA_COUNT),
    }
}
