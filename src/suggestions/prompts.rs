/// Prompt sent to the completion provider. Deterministic: the same resume and
/// job description always produce the same prompt.
pub const SUGGESTION_PROMPT_TEMPLATE: &str = "Improve the following resume to better match the job description.\n\nResume:\n{resume}\n\nJob Description:\n{job}\n\nSuggestions:";

/// Returned to the caller (and logged) when the provider answers with no content.
pub const EMPTY_SUGGESTION_FALLBACK: &str = "No suggestion generated.";

pub fn build_prompt(resume: &str, job_description: &str) -> String {
    SUGGESTION_PROMPT_TEMPLATE
        .replace("{resume}", resume)
        .replace("{job}", job_description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_both_texts_verbatim() {
        let prompt = build_prompt("ten years of Rust", "must own a parser");
        assert!(prompt.starts_with("Improve the following resume"));
        assert!(prompt.contains("Resume:\nten years of Rust"));
        assert!(prompt.contains("Job Description:\nmust own a parser"));
        assert!(prompt.ends_with("Suggestions:"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(build_prompt("r", "j"), build_prompt("r", "j"));
    }
}
