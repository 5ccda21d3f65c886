//! Vocabulary-based skill detection.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Recognised skills, lower-case. Multi-word entries match as phrases.
pub const SKILL_VOCABULARY: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "sql",
    "pandas",
    "numpy",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "keras",
    "nlp",
    "streamlit",
    "flask",
    "fastapi",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "react",
    "vue",
    "angular",
    "data structures",
    "algorithms",
    "deep learning",
    "machine learning",
];

struct SkillPattern {
    canonical: String,
    pattern: Regex,
}

// Boundaries are explicit non-word characters rather than `\b` so entries
// ending in punctuation (`c++`) still match as whole words.
static SKILL_PATTERNS: Lazy<Vec<SkillPattern>> = Lazy::new(|| {
    SKILL_VOCABULARY
        .iter()
        .map(|skill| {
            let phrase = skill
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+");
            SkillPattern {
                canonical: title_case(skill),
                pattern: Regex::new(&format!(r"(?i)(?:^|[^\w]){phrase}(?:[^\w]|$)"))
                    .expect("valid skill regex"),
            }
        })
        .collect()
});

/// Title-cased vocabulary entries found in the text, each at most once.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    SKILL_PATTERNS
        .iter()
        .filter(|skill| skill.pattern.is_match(text))
        .map(|skill| skill.canonical.clone())
        .collect()
}

/// Upper-cases every letter that follows a non-letter, lower-cases the rest.
/// `scikit-learn` -> `Scikit-Learn`, `c++` -> `C++`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}
