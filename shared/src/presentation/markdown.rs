//! Minimal Markdown to HTML conversion
//!
//! Used when the page has no full Markdown renderer loaded. Handles bold,
//! italic, three heading levels, list items, and paragraph breaks; anything
//! else passes through untouched.

use std::sync::OnceLock;

use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
    /// Replace every match rather than only the first
    all: bool,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str, all: bool) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("markdown rule pattern is valid"),
            replacement,
            all,
        }
    }

    fn apply(&self, text: &str) -> String {
        if self.all {
            self.pattern.replace_all(text, self.replacement).into_owned()
        } else {
            self.pattern.replace(text, self.replacement).into_owned()
        }
    }
}

fn rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            Rule::new(r"\*\*(.*?)\*\*", "<strong>${1}</strong>", true),
            Rule::new(r"\*(.*?)\*", "<em>${1}</em>", true),
            Rule::new(r"(?m)^### (.*)$", "<h3>${1}</h3>", true),
            Rule::new(r"(?m)^## (.*)$", "<h2>${1}</h2>", true),
            Rule::new(r"(?m)^# (.*)$", "<h1>${1}</h1>", true),
            Rule::new(r"(?m)^[0-9]+\.\s+(.*)$", "<li>${1}</li>", true),
            Rule::new(r"(?m)^[-*]\s+(.*)$", "<li>${1}</li>", true),
            // One list per response: from the first item to the last.
            Rule::new(r"(?s)(<li>.*</li>)", "<ul>${1}</ul>", false),
            Rule::new(r"\n\n", "</p><p>", true),
        ]
    })
}

/// Convert Markdown to HTML with the fallback rule set
pub fn format_markdown(text: &str) -> String {
    let body = rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc));
    format!("<p>{}</p>", body)
}
