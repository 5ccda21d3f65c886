use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

/// Rendered in place of any field the extractors could not determine.
pub const NOT_FOUND: &str = "Not Found";

/// Rendered when no usable date range was found in the resume.
pub const AMATEUR: &str = "Amateur";

/// Total professional tenure derived from date ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Amateur,
    Tenure { months: u32 },
}

impl Experience {
    pub fn from_months(months: u32) -> Self {
        if months == 0 {
            Experience::Amateur
        } else {
            Experience::Tenure { months }
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let months = match self {
            Experience::Amateur => return f.write_str(AMATEUR),
            Experience::Tenure { months } => *months,
        };

        let mut parts = Vec::with_capacity(2);
        for (count, unit) in [(months / 12, "year"), (months % 12, "month")] {
            match count {
                0 => {}
                1 => parts.push(format!("1 {unit}")),
                n => parts.push(format!("{n} {unit}s")),
            }
        }
        f.write_str(&parts.join(" and "))
    }
}

impl Serialize for Experience {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Structured fields pulled out of a resume body.
///
/// Absence is `None` internally and only becomes `"Not Found"` on serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeDetails {
    #[serde(serialize_with = "or_not_found")]
    pub name: Option<String>,
    #[serde(serialize_with = "or_not_found")]
    pub email: Option<String>,
    #[serde(serialize_with = "or_not_found")]
    pub phone: Option<String>,
    #[serde(serialize_with = "or_not_found")]
    pub education: Option<String>,
    pub experience: Experience,
    pub skills: BTreeSet<String>,
}

fn or_not_found<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(NOT_FOUND))
}
