//! Prompt templates.

use translator_types::Direction;

/// Instruction for `direction` followed by a blank line and `text`.
pub fn build_prompt(direction: Direction, text: &str) -> String {
    format!("{}\n\n{}", direction.profile().instruction, text)
}

pub fn build_english_prompt(text: &str) -> String {
    build_prompt(Direction::ToEnglish, text)
}

pub fn build_japanese_prompt(text: &str) -> String {
    build_prompt(Direction::ToJapanese, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [&str; 4] = ["PRをマージしました", "Deployed the fix.", "a", "行1\n行2"];

    #[test]
    fn test_prompts_end_with_input_verbatim() {
        for text in SAMPLES {
            for prompt in [build_english_prompt(text), build_japanese_prompt(text)] {
                assert!(prompt.ends_with(&format!(":\n\n{}", text)), "prompt: {prompt}");
            }
        }
    }

    #[test]
    fn test_english_prompt_wording() {
        let prompt = build_english_prompt("x");
        assert!(prompt.starts_with("Act as a software engineer"));
        assert!(prompt.contains("'PR' instead of 'pull request'"));
        assert!(prompt.contains("Assume singular"));
        assert!(prompt.contains("Output only the translated text"));
    }

    #[test]
    fn test_japanese_prompt_wording() {
        let prompt = build_japanese_prompt("x");
        assert!(prompt.starts_with("Translate the following English text"));
        assert!(prompt.contains("natural-sounding Japanese"));
        assert!(prompt.contains("strictly the translated text and nothing else"));
        assert!(prompt.contains("alternative translations"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(build_japanese_prompt("same"), build_japanese_prompt("same"));
        assert_eq!(build_prompt(Direction::ToEnglish, "t"), build_english_prompt("t"));
    }
}
