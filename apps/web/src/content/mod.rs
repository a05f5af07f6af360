//! Literal marketing copy for the landing page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TechStackEntry {
    pub name: &'static str,
    pub tech: &'static str,
    pub icon: &'static str,
}

/// Everything on the page that is neither chat nor chart data.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub features: &'static [Feature],
    pub flow_steps: &'static [&'static str],
    pub tech_stack: &'static [TechStackEntry],
    pub quick_questions: &'static [&'static str],
}

pub const PRODUCT_NAME: &str = "VisionAI";
pub const PAGE_TITLE: &str = "VisionAI - Personalized Career & Skills Advisor";
pub const TAGLINE: &str = "AI-powered guidance for students and professionals to discover their \
ideal career paths and bridge skill gaps";
pub const KEYWORDS: &str =
    "career advisor, AI, skills analysis, job recommendations, professional development";
pub const AUTHOR: &str = "Team VisionAI - Shubham Sharma";

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🤖",
        title: "AI Career Chatbot",
        description: "Real-time AI-powered career guidance and personalized advice for your professional journey",
        color: "from-blue-500 to-purple-600",
    },
    Feature {
        icon: "📡",
        title: "Skill Gap Analysis",
        description: "Interactive radar chart visualization to identify and track your skill development areas",
        color: "from-green-500 to-teal-600",
    },
    Feature {
        icon: "🧭",
        title: "Career Recommendations",
        description: "Personalized career path suggestions based on your skills, interests, and market demand",
        color: "from-orange-500 to-red-600",
    },
    Feature {
        icon: "🏆",
        title: "Gamification",
        description: "Earn badges, maintain streaks, and track progress to make learning engaging and motivating",
        color: "from-yellow-500 to-orange-600",
    },
    Feature {
        icon: "🔧",
        title: "Hardware Prototype",
        description: "Career Kiosk and Voice Assistant for accessible career guidance in public spaces",
        color: "from-purple-500 to-pink-600",
    },
    Feature {
        icon: "🎓",
        title: "Learning Roadmap",
        description: "Customized learning paths with courses, resources, and milestones tailored to your goals",
        color: "from-indigo-500 to-blue-600",
    },
];

pub const FLOW_STEPS: &[&str] = &[
    "Profile Input",
    "AI Analysis",
    "Career Suggestions",
    "Skill Gap Report",
    "Learning Roadmap",
    "Progress Tracking",
];

pub const TECH_STACK: &[TechStackEntry] = &[
    TechStackEntry {
        name: "Frontend",
        tech: "Next.js, Tailwind, React Native",
        icon: "⚛️",
    },
    TechStackEntry {
        name: "Backend",
        tech: "Node.js, Express",
        icon: "🟢",
    },
    TechStackEntry {
        name: "Database",
        tech: "PostgreSQL, Firebase",
        icon: "🗄️",
    },
    TechStackEntry {
        name: "AI Layer",
        tech: "Google Gemini API",
        icon: "🤖",
    },
    TechStackEntry {
        name: "Hardware",
        tech: "Raspberry Pi, ESP32",
        icon: "🔌",
    },
];

/// Suggested prompts shown under the chat window.
pub const QUICK_QUESTIONS: &[&str] = &[
    "What career paths suit my skills?",
    "How can I improve my communication skills?",
    "What are the highest paying tech jobs?",
    "Should I switch careers?",
    "How to prepare for interviews?",
    "What skills are in demand?",
];

pub fn page_content() -> PageContent {
    PageContent {
        features: FEATURES,
        flow_steps: FLOW_STEPS,
        tech_stack: TECH_STACK,
        quick_questions: QUICK_QUESTIONS,
    }
}
