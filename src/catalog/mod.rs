//! Course catalog and per-session library

mod filter;
mod library;

pub use filter::*;
pub use library::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Subject area of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Development,
    Design,
    #[serde(rename = "Data Science")]
    DataScience,
    Marketing,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Development,
        Category::Design,
        Category::DataScience,
        Category::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::DataScience => "Data Science",
            Category::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(wanted)
                    || c.as_str().replace(' ', "-").eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Difficulty of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Beginner => write!(f, "Beginner"),
            Level::Intermediate => write!(f, "Intermediate"),
            Level::Advanced => write!(f, "Advanced"),
        }
    }
}

/// A course listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub level: Level,
    pub instructor: String,
    pub duration: String,
    pub rating: f32,
    pub students: u32,
    pub price: String,
}

/// Read-only set of courses
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// The mock catalog shipped with the app
    pub fn builtin() -> Self {
        let course = |id: u32,
                      title: &str,
                      description: &str,
                      category: Category,
                      level: Level,
                      instructor: &str,
                      duration: &str,
                      rating: f32,
                      students: u32,
                      price: &str| Course {
            id,
            title: title.to_string(),
            description: description.to_string(),
            category,
            level,
            instructor: instructor.to_string(),
            duration: duration.to_string(),
            rating,
            students,
            price: price.to_string(),
        };

        Self::new(vec![
            course(
                1,
                "React Native Masterclass",
                "Build professional mobile apps with React Native and Expo",
                Category::Development,
                Level::Intermediate,
                "John Smith",
                "12h 30m",
                4.8,
                2340,
                "$89",
            ),
            course(
                2,
                "UI/UX Design Fundamentals",
                "Learn modern design principles and create stunning interfaces",
                Category::Design,
                Level::Beginner,
                "Sarah Johnson",
                "8h 45m",
                4.9,
                1890,
                "$79",
            ),
            course(
                3,
                "JavaScript Advanced Concepts",
                "Master advanced JavaScript concepts and modern ES6+ features",
                Category::Development,
                Level::Advanced,
                "Mike Chen",
                "15h 20m",
                4.7,
                3120,
                "$99",
            ),
            course(
                4,
                "Data Science with Python",
                "Analyze data and build machine learning models with Python",
                Category::DataScience,
                Level::Intermediate,
                "Dr. Emily Davis",
                "20h 15m",
                4.6,
                1560,
                "$129",
            ),
            course(
                5,
                "Digital Marketing Strategy",
                "Build effective marketing campaigns and grow your business",
                Category::Marketing,
                Level::Beginner,
                "Alex Rodriguez",
                "6h 30m",
                4.5,
                980,
                "$69",
            ),
        ])
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn find(&self, id: u32) -> Result<&Course> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .ok_or(Error::CourseNotFound(id))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.courses.iter().any(|c| c.id == id)
    }

    /// Courses matching `filter`, in catalog order
    pub fn search(&self, filter: &CourseFilter) -> Vec<&Course> {
        self.courses.iter().filter(|c| filter.matches(c)).collect()
    }
}
