//! Prompt assembly for the completion request.
//!
//! The system message carries the role; the user message carries the rules,
//! the worked examples and the text to convert:
//!
//! ```text
//! 【やさしい日本語のルール】 ...
//!
//! 【変換例】
//! 例1:
//! 原文: ...
//! やさしい日本語: ...
//!
//! 【変換対象】
//! 以下の文章を「やさしい日本語」に変換してください。
//!
//! 原文:
//! {input}
//!
//! やさしい日本語:
//! ```

use crate::data::{FewShotExample, GUIDELINE_RULES, SYSTEM_PROMPT, default_examples};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptBuilder {
    system_prompt: String,
    guideline_rules: String,
    examples: Vec<FewShotExample>,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        PromptBuilder::new(SYSTEM_PROMPT, GUIDELINE_RULES, default_examples())
    }
}

impl PromptBuilder {
    pub fn new(
        system_prompt: impl Into<String>,
        guideline_rules: impl Into<String>,
        examples: Vec<FewShotExample>,
    ) -> Self {
        PromptBuilder {
            system_prompt: system_prompt.into(),
            guideline_rules: guideline_rules.into(),
            examples,
        }
    }

    pub fn with_examples(&mut self, examples: Vec<FewShotExample>) -> &mut Self {
        self.examples = examples;
        self
    }

    pub fn examples(&self) -> &[FewShotExample] {
        &self.examples
    }

    pub fn build_system_message(&self) -> String {
        self.system_prompt.clone()
    }

    /// User turn with the first `num_examples` examples (all of them if fewer
    /// are available).
    pub fn build_user_message(&self, user_input: &str, num_examples: usize) -> String {
        let selected = &self.examples[..num_examples.min(self.examples.len())];
        format!(
            "{rules}

【変換例】
{examples}

【変換対象】
以下の文章を「やさしい日本語」に変換してください。

原文:
{input}

やさしい日本語:",
            rules = self.guideline_rules,
            examples = format_examples(selected),
            input = user_input,
        )
    }

    /// Single-string prompt for completion endpoints without chat roles.
    pub fn build_prompt(&self, user_input: &str, num_examples: usize) -> String {
        format!(
            "{}\n\n{}",
            self.system_prompt,
            self.build_user_message(user_input, num_examples)
        )
    }
}

/// `例{n}:` blocks separated by blank lines, numbered from 1.
pub fn format_examples(examples: &[FewShotExample]) -> String {
    examples
        .iter()
        .enumerate()
        .map(|(i, example)| {
            format!(
                "例{}:\n原文: {}\nやさしい日本語: {}\n",
                i + 1,
                example.original,
                example.yasashii
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
