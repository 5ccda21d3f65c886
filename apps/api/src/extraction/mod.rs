// Rule-based resume field extraction. Pure functions over decoded text;
// a field that cannot be determined is `None`, never an error.

pub mod contact;
pub mod details;
pub mod education;
pub mod experience;
pub mod models;
pub mod name;
pub mod skills;

pub use details::extract_resume_details;
pub use models::ResumeDetails;
