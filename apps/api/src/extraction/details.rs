use chrono::{Local, NaiveDate};

use crate::extraction::contact::{extract_email, extract_phone};
use crate::extraction::education::extract_education;
use crate::extraction::experience::extract_experience;
use crate::extraction::models::ResumeDetails;
use crate::extraction::name::extract_name;
use crate::extraction::skills::extract_skills;

/// Extracts every field from a decoded resume, with open-ended date ranges
/// ending in the current month.
pub fn extract_resume_details(text: &str) -> ResumeDetails {
    extract_resume_details_at(text, Local::now().date_naive())
}

/// Order matters: the name falls back to the email, so email runs first.
pub fn extract_resume_details_at(text: &str, today: NaiveDate) -> ResumeDetails {
    let lines = non_empty_lines(text);

    let email = extract_email(text);
    let phone = extract_phone(text);
    let name = extract_name(&lines, email.as_deref());
    let skills = extract_skills(text);
    let education = extract_education(&lines);
    let experience = extract_experience(text, today);

    ResumeDetails {
        name,
        email,
        phone,
        education,
        experience,
        skills,
    }
}

fn non_empty_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
