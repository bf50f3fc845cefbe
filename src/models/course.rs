//! Hole, CourseType, and course construction.

use serde::{Deserialize, Serialize};

/// Default pars for a 9-hole round (total 36).
pub const DEFAULT_PARS_9: [u32; 9] = [3, 4, 5, 4, 4, 3, 5, 4, 4];

/// Default pars for an 18-hole round: front 9 plus an arbitrary back 9 (total 72).
pub const DEFAULT_PARS_18: [u32; 18] = [
    3, 4, 5, 4, 4, 3, 5, 4, 4, //
    4, 3, 4, 5, 4, 3, 4, 5, 4,
];

/// One hole of the course: its 1-indexed number and par.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub number: u32,
    pub par: u32,
}

/// Errors that can occur when building a course from a par list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CourseError {
    /// The par list was empty.
    Empty,
    /// A hole had par 0 (hole numbers are 1-indexed).
    ZeroPar(u32),
}

impl std::fmt::Display for CourseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseError::Empty => write!(f, "Course must have at least one hole"),
            CourseError::ZeroPar(n) => write!(f, "Hole {} has par 0 (must be at least 1)", n),
        }
    }
}

/// 9 or 18 holes. Serialized as the number itself (9 or 18).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CourseType {
    #[default]
    Nine,
    Eighteen,
}

impl CourseType {
    /// Number of holes for this course type.
    pub fn holes(self) -> usize {
        match self {
            CourseType::Nine => 9,
            CourseType::Eighteen => 18,
        }
    }

    /// The default par preset for this course type.
    pub fn default_pars(self) -> &'static [u32] {
        match self {
            CourseType::Nine => &DEFAULT_PARS_9,
            CourseType::Eighteen => &DEFAULT_PARS_18,
        }
    }

    /// A course built from this type's preset pars.
    pub fn default_course(self) -> Vec<Hole> {
        number_holes(self.default_pars())
    }
}

impl TryFrom<u8> for CourseType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(CourseType::Nine),
            18 => Ok(CourseType::Eighteen),
            other => Err(format!("Invalid course type {} (expected 9 or 18)", other)),
        }
    }
}

impl From<CourseType> for u8 {
    fn from(value: CourseType) -> Self {
        match value {
            CourseType::Nine => 9,
            CourseType::Eighteen => 18,
        }
    }
}

/// Build a course from a par list, numbering holes 1..=N in order.
pub fn build_course(pars: &[u32]) -> Result<Vec<Hole>, CourseError> {
    if pars.is_empty() {
        return Err(CourseError::Empty);
    }
    if let Some(i) = pars.iter().position(|&p| p == 0) {
        return Err(CourseError::ZeroPar(i as u32 + 1));
    }
    Ok(number_holes(pars))
}

fn number_holes(pars: &[u32]) -> Vec<Hole> {
    pars.iter()
        .enumerate()
        .map(|(i, &par)| Hole {
            number: i as u32 + 1,
            par,
        })
        .collect()
}
