use std::fmt;

use serde::{Deserialize, Serialize};

/// A skill from the fixed catalog offered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    JavaScript,
    #[serde(rename = "CSS")]
    Css,
    Python,
    Java,
}

static CATALOG: &[Skill] = &[Skill::JavaScript, Skill::Css, Skill::Python, Skill::Java];

impl Skill {
    /// Returns the skill catalog in display order.
    pub fn all() -> &'static [Skill] {
        CATALOG
    }

    /// Returns the display name of this skill.
    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::JavaScript => "JavaScript",
            Skill::Css => "CSS",
            Skill::Python => "Python",
            Skill::Java => "Java",
        }
    }
}

#[mutants::skip]
impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
