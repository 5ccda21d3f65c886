//! Education detection: institution lines paired with the preceding line,
//! then a degree-only fallback.

use once_cell::sync::Lazy;
use regex::Regex;

static INSTITUTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy)\b")
        .expect("valid institution regex")
});

// Dotted abbreviations are required for the two-letter forms so that
// ordinary words ("be", "ms") do not count as degrees.
static DEGREE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?ix)
        \b(?:
            [bm]\.?\s?tech\b
          | [bm]\.?\s?sc\b
          | ph\.?\s?d\b
          | mba\b | bca\b | mca\b
          | [bm]\.\s?[aes]\b
          | (?:bachelor|master)(?:'s)?\s+(?:of|in)\s+\w+
          | (?:bachelor|master)(?:'s)?\s+degree
          | doctor(?:ate)?\s+of\s+\w+
        )",
    )
    .expect("valid degree regex")
});

/// Lines are the trimmed, non-empty lines of the resume, in order.
pub fn extract_education(lines: &[&str]) -> Option<String> {
    for (i, line) in lines.iter().enumerate() {
        if !INSTITUTION_RE.is_match(line) {
            continue;
        }
        let context = match i.checked_sub(1) {
            Some(prev) => format!("{} {}", lines[prev], line),
            None => line.to_string(),
        };
        if DEGREE_RE.is_match(&context) {
            return Some(normalize_whitespace(&context));
        }
    }

    lines
        .iter()
        .find(|line| DEGREE_RE.is_match(line))
        .map(|line| normalize_whitespace(line))
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_degree(text: &str) -> bool {
        DEGREE_RE.is_match(text)
    }

    #[test]
    fn test_degree_on_previous_line_paired_with_institution() {
        let lines = ["EDUCATION", "B.Tech in Computer Science", "Delhi   Technological University"];
        assert_eq!(
            extract_education(&lines).as_deref(),
            Some("B.Tech in Computer Science Delhi Technological University")
        );
    }

    #[test]
    fn test_degree_and_institution_on_same_line() {
        let lines = ["Jane Doe", "M.S. Computer Science, Stanford University, 2018"];
        assert_eq!(
            extract_education(&lines).as_deref(),
            Some("Jane Doe M.S. Computer Science, Stanford University, 2018")
        );
    }

    #[test]
    fn test_institution_on_first_line_uses_only_that_line() {
        let lines = ["Bachelor of Engineering, Pune Institute of Technology", "Skills"];
        assert_eq!(
            extract_education(&lines).as_deref(),
            Some("Bachelor of Engineering, Pune Institute of Technology")
        );
    }

    #[test]
    fn test_institution_without_degree_keeps_scanning() {
        let lines = [
            "Volunteer at Lincoln High School",
            "Experience",
            "Ph.D in Physics",
            "MIT Institute of Technology",
        ];
        assert_eq!(
            extract_education(&lines).as_deref(),
            Some("Ph.D in Physics MIT Institute of Technology")
        );
    }

    #[test]
    fn test_degree_only_fallback() {
        let lines = ["Summary", "Holds an MBA  from a top program", "Skills"];
        assert_eq!(
            extract_education(&lines).as_deref(),
            Some("Holds an MBA from a top program")
        );
    }

    #[test]
    fn test_no_institution_no_degree() {
        let lines = ["John Smith", "Rust developer", "Skills: Docker"];
        assert_eq!(extract_education(&lines), None);
    }

    #[test]
    fn test_institution_alone_is_not_education() {
        let lines = ["Guest lecturer", "Harvard University"];
        assert_eq!(extract_education(&lines), None);
    }

    #[test]
    fn test_degree_patterns() {
        for degree in [
            "B.Tech", "BTech", "M.Tech", "B.E.", "B.E", "M.S.", "M.S", "B.Sc", "MSc", "Ph.D",
            "PhD", "MBA", "Bachelor of Science", "Master's in Data Science", "Doctor of Medicine",
        ] {
            assert!(is_degree(degree), "expected degree: {degree}");
        }
    }

    #[test]
    fn test_common_words_are_not_degrees() {
        for text in ["I will be there", "MS Office", "master branch", "bachelor party"] {
            assert!(!is_degree(text), "unexpected degree: {text}");
        }
    }
}
