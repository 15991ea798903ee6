//! The record stored in a [`CourseTree`][crate::tree::CourseTree].

use std::fmt;

/// A single course: its number, title, and the numbers of the courses that must be taken first.
///
/// A `Course` with an empty course number (what [`Course::default`] gives you) means "not found"
/// when it comes back from [`CourseTree::search`][crate::tree::CourseTree::search].
///
/// # Examples
///
/// ```
/// use course_planner::course::Course;
///
/// let mut course = Course::new("CSCI300", "Introduction to Algorithms");
/// course.add_prerequisite("CSCI200");
/// course.add_prerequisite("MATH201");
///
/// assert_eq!(course.course_number(), "CSCI300");
/// assert_eq!(course.prerequisites(), ["CSCI200", "MATH201"]);
/// assert_eq!(course.to_string(), "CSCI300, Introduction to Algorithms");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Course {
    course_number: String,
    title: String,
    prerequisites: Vec<String>,
}

impl Course {
    /// Creates a course with no prerequisites.
    pub fn new(course_number: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            course_number: course_number.into(),
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Appends each of `prerequisites`, in order, and returns the course.
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites
            .extend(prerequisites.into_iter().map(Into::into));
        self
    }

    /// Appends a prerequisite. Duplicates are kept.
    pub fn add_prerequisite(&mut self, prerequisite: impl Into<String>) {
        self.prerequisites.push(prerequisite.into());
    }

    /// The course number this course is ordered and searched by.
    pub fn course_number(&self) -> &str {
        &self.course_number
    }

    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Prerequisite course numbers in the order they were added.
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Whether this is a real course rather than the empty "not found" value.
    pub fn is_found(&self) -> bool {
        !self.course_number.is_empty()
    }

    /// Whether this is the empty "not found" value.
    pub fn is_not_found(&self) -> bool {
        !self.is_found()
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.course_number, self.title)
    }
}
