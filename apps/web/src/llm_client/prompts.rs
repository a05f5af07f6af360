// Prompt fragments for the career advisor chat.

/// Instruction preamble sent ahead of every user question.
pub const CAREER_ADVISOR_PREAMBLE: &str = "You are a professional career advisor AI assistant. \
Help the user with career guidance, skill development, job search advice, and professional growth. \
Be helpful, encouraging, and provide practical advice. \
Keep responses concise but informative.";

/// Builds the completion prompt for one user question. The question is passed through verbatim.
pub fn build_chat_prompt(question: &str) -> String {
    format!("{CAREER_ADVISOR_PREAMBLE}\n\nUser question: {question}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_ends_with_raw_question() {
        let prompt = build_chat_prompt("  Should I switch careers?");
        assert!(prompt.starts_with(CAREER_ADVISOR_PREAMBLE));
        assert!(prompt.ends_with("User question:   Should I switch careers?"));
    }
}
