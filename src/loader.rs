//! Bulk loading of courses from a comma-separated file.
//!
//! Each line is `<course number>,<title>[,<prerequisite>...]`. Lines with fewer than two fields are
//! skipped, as are empty prerequisite fields (so trailing commas are harmless). Fields are taken
//! as-is; nothing is trimmed or quoted. Bytes that aren't valid UTF-8 are replaced with `U+FFFD`
//! rather than failing the load.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::course::Course;
use crate::tree::CourseTree;

/// Reasons a course file couldn't be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file couldn't be opened.
    #[error("could not open {}", path.display())]
    Open {
        /// The file that was asked for.
        path: PathBuf,
        /// Why it couldn't be opened.
        #[source]
        source: io::Error,
    },

    /// Reading failed partway through.
    #[error("failed reading {}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// The underlying read error.
        #[source]
        source: io::Error,
    },

    /// The file had no line with at least a course number and a title.
    #[error("no valid course data found in {}", path.display())]
    NoCourses {
        /// The file that was read.
        path: PathBuf,
    },
}

/// Parses one line into a course, or `None` if it has fewer than two fields.
///
/// # Examples
///
/// ```
/// use course_planner::loader::parse_line;
///
/// let course = parse_line("CSCI300,Introduction to Algorithms,CSCI200,,MATH201,").unwrap();
/// assert_eq!(course.course_number(), "CSCI300");
/// assert_eq!(course.title(), "Introduction to Algorithms");
/// assert_eq!(course.prerequisites(), ["CSCI200", "MATH201"]);
///
/// assert_eq!(parse_line("CSCI300"), None);
/// ```
pub fn parse_line(line: &str) -> Option<Course> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields = line.split(',');
    let course_number = fields.next()?;
    let title = fields.next()?;

    Some(
        Course::new(course_number, title)
            .with_prerequisites(fields.filter(|field| !field.is_empty())),
    )
}

/// Inserts every course in `reader` into `tree` and returns how many were inserted.
///
/// Unlike [`load_courses`], finding no courses isn't an error here.
///
/// # Errors
///
/// Returns any error from reading `reader`. Invalid UTF-8 is not an error.
pub fn load_from_reader<R: BufRead>(reader: R, tree: &mut CourseTree) -> io::Result<usize> {
    let mut count = 0;
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8_lossy(&bytes);
        match parse_line(&line) {
            Some(course) => {
                tree.insert(course);
                count += 1;
            }
            None => debug!(line_number = index + 1, %line, "skipping line without a title"),
        }
    }

    Ok(count)
}

/// Opens the file at `path` and inserts every course in it into `tree`, returning how many were
/// inserted.
///
/// Courses read before a read error stay in the tree.
///
/// # Errors
///
/// Returns [`LoadError::Open`] if the file can't be opened, [`LoadError::Read`] if reading it
/// fails, and [`LoadError::NoCourses`] if it holds no valid course lines.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_courses(path: impl AsRef<Path>, tree: &mut CourseTree) -> Result<usize, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let count =
        load_from_reader(BufReader::new(file), tree).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    if count == 0 {
        return Err(LoadError::NoCourses {
            path: path.to_path_buf(),
        });
    }

    info!(count, total = tree.len(), "loaded courses");
    Ok(count)
}
