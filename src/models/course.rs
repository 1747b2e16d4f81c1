use serde::{Deserialize, Serialize};

/// The category a dish belongs to.
///
/// The menu knows exactly three courses; there is no "other" bucket. The
/// serialized form is the variant name verbatim (`"Starter"`, `"Main"`,
/// `"Dessert"`), which is also what pickers and data records carry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Self::Starter, Self::Main, Self::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Starter => "Starter",
            Self::Main => "Main",
            Self::Dessert => "Dessert",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Starter" => Some(Self::Starter),
            "Main" => Some(Self::Main),
            "Dessert" => Some(Self::Dessert),
            _ => None,
        }
    }
}

/// A filter control's selection: one concrete course, or everything.
///
/// `All` is a sentinel, not a fourth course; no dish ever carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseFilter {
    All,
    Only(Course),
}

impl CourseFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(course) => course.as_str(),
        }
    }

    /// Parses a filter label. Anything that is neither `"All"` nor one of
    /// the three course names yields `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "All" => Some(Self::All),
            other => Course::from_str(other).map(Self::Only),
        }
    }

    /// Whether a dish of the given course passes this filter.
    pub fn matches(&self, course: Course) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == course,
        }
    }
}
