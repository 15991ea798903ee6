//! The interactive course planner: a numbered menu for loading a course file, listing every
//! course, and looking up a single course with its prerequisites.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use clap::ArgAction;
use tracing::{debug, warn};

use crate::loader::{self, LoadError};
use crate::tree::CourseTree;
use crate::util::trim_blanks;

const RULE: &str = "-----------------------------------------";
const DOUBLE_RULE: &str = "=========================================";

/// Command-line arguments for the `course-planner` binary.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// A course file to load before showing the menu
    #[arg(short, long, env = "COURSE_PLANNER_FILE")]
    file: Option<PathBuf>,
}

impl Cli {
    /// Runs the menu on stdin and stdout until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Fails if `--file` was given and couldn't be loaded, or if the terminal can't be read from or
    /// written to.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut session = Session::new();
        if let Some(path) = &self.file {
            session
                .load(path)
                .with_context(|| format!("failed to preload {}", path.display()))?;
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        Menu::new(stdin.lock(), stdout.lock(), session)
            .run()
            .context("terminal I/O failed")
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // Keep logs off stdout so they don't interleave with the menu.
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Everything the menu needs to remember between choices.
#[derive(Debug, Default)]
pub struct Session {
    tree: CourseTree,
    loaded: bool,
}

impl Session {
    /// A session with no courses loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// The courses loaded so far.
    pub fn tree(&self) -> &CourseTree {
        &self.tree
    }

    /// Whether the last load succeeded and there is something to show.
    pub fn is_ready(&self) -> bool {
        self.loaded && !self.tree.is_empty()
    }

    /// Adds the courses in the file at `path` to this session.
    ///
    /// Courses from earlier loads are kept; a failed load only marks the session as not loaded.
    ///
    /// # Errors
    ///
    /// See [`loader::load_courses`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let result = loader::load_courses(path, &mut self.tree);
        self.loaded = result.is_ok();
        result
    }
}

/// A main menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1. Load Data Structure
    Load,
    /// 2. Print Course List
    PrintCourseList,
    /// 3. Print Course
    PrintCourse,
    /// 9. Exit
    Exit,
}

/// Why a line typed at the main menu isn't a [`MenuChoice`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    /// The input wasn't a number at all.
    #[error("Invalid input. Please enter a number.")]
    NotANumber,
    /// A number that isn't on the menu.
    #[error("{0} is not a valid option.")]
    Unknown(i64),
}

impl FromStr for MenuChoice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s.trim().parse().map_err(|_| ChoiceError::NotANumber)?;
        match number {
            1 => Ok(Self::Load),
            2 => Ok(Self::PrintCourseList),
            3 => Ok(Self::PrintCourse),
            9 => Ok(Self::Exit),
            other => Err(ChoiceError::Unknown(other)),
        }
    }
}

/// Pulls the course number out of what a user typed: anything from the first comma on is dropped
/// (so a pasted `"CSCI100, Intro"` line works) and surrounding spaces and tabs are removed.
pub fn course_number_from_input(input: &str) -> &str {
    trim_blanks(input.split(',').next().unwrap_or_default())
}

/// The menu loop, reading choices from `input` and writing everything to `output`.
pub struct Menu<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    /// Creates a menu over an existing session.
    pub fn new(input: R, output: W, session: Session) -> Self {
        Self {
            input,
            output,
            session,
        }
    }

    /// Hands back the session, e.g. to inspect it after [`run`][Self::run].
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Shows the menu and handles choices until the user picks Exit or input runs out.
    ///
    /// # Errors
    ///
    /// Returns any error reading from `input` or writing to `output`.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{DOUBLE_RULE}")?;
        writeln!(self.output, "     WELCOME TO THE COURSE PLANNER      ")?;
        writeln!(self.output, "{DOUBLE_RULE}")?;

        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                debug!("input closed, leaving menu");
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Load) => self.load()?,
                Ok(MenuChoice::PrintCourseList) => self.print_course_list()?,
                Ok(MenuChoice::PrintCourse) => self.print_course()?,
                Ok(MenuChoice::Exit) => break,
                Err(err) => {
                    self.section("               ERROR                     ")?;
                    writeln!(self.output, "{err}")?;
                    writeln!(self.output, "{RULE}")?;
                }
            }
        }

        writeln!(self.output, "\n{DOUBLE_RULE}")?;
        writeln!(self.output, "Thank you for using the course planner!")?;
        writeln!(self.output, "{DOUBLE_RULE}")?;
        self.output.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{DOUBLE_RULE}")?;
        writeln!(self.output, "               MAIN MENU                ")?;
        writeln!(self.output, "{DOUBLE_RULE}")?;
        writeln!(self.output, "1. Load Data Structure")?;
        writeln!(self.output, "2. Print Course List")?;
        writeln!(self.output, "3. Print Course")?;
        writeln!(self.output, "9. Exit")?;
        writeln!(self.output, "{DOUBLE_RULE}")?;
        write!(self.output, "What would you like to do? ")?;
        self.output.flush()
    }

    /// Reads one line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn section(&mut self, heading: &str) -> io::Result<()> {
        writeln!(self.output, "\n{RULE}")?;
        writeln!(self.output, "{heading}")?;
        writeln!(self.output, "{RULE}")
    }

    /// Returns `false` after warning the user if there is nothing loaded to show.
    fn ensure_loaded(&mut self) -> io::Result<bool> {
        if self.session.is_ready() {
            return Ok(true);
        }
        self.section("               WARNING                   ")?;
        writeln!(self.output, "Please load data first (option 1).")?;
        writeln!(self.output, "{RULE}")?;
        Ok(false)
    }

    fn load(&mut self) -> io::Result<()> {
        self.section("            LOAD DATA FILE              ")?;
        write!(self.output, "Enter the file name containing course data: ")?;
        self.output.flush()?;
        let path = self.read_line()?.unwrap_or_default();

        match self.session.load(&path) {
            Ok(count) => {
                writeln!(self.output, "File loaded successfully!")?;
                writeln!(self.output, "Loaded {count} courses.")?;
            }
            Err(err @ LoadError::NoCourses { .. }) => {
                warn!(%path, "{err}");
                writeln!(self.output, "Warning: No valid course data found in the file.")?;
            }
            Err(err @ LoadError::Read { .. }) => {
                warn!(%path, error = ?err, "{err}");
                writeln!(self.output, "Error: Could not read file \"{path}\"")?;
                writeln!(
                    self.output,
                    "Courses read before the error were kept, but the load did not finish."
                )?;
            }
            Err(err @ LoadError::Open { .. }) => {
                warn!(%path, "{err}");
                writeln!(self.output, "Error: Could not open file \"{path}\"")?;
                writeln!(
                    self.output,
                    "Make sure the file exists and the name is typed correctly including spaces."
                )?;
            }
        }
        writeln!(self.output, "{RULE}")
    }

    fn print_course_list(&mut self) -> io::Result<()> {
        if !self.ensure_loaded()? {
            return Ok(());
        }
        write!(self.output, "\nHere is a sample schedule:")?;
        self.section("            COURSE LISTING              ")?;
        self.session.tree.print_course_list(&mut self.output)?;
        writeln!(self.output, "{RULE}")
    }

    fn print_course(&mut self) -> io::Result<()> {
        if !self.ensure_loaded()? {
            return Ok(());
        }
        self.section("           COURSE LOOKUP                 ")?;
        write!(self.output, "What course do you want to know about? ")?;
        self.output.flush()?;
        let input = self.read_line()?.unwrap_or_default();
        let course_number = course_number_from_input(&input);

        let course = self.session.tree.search(course_number);
        self.section("          COURSE INFORMATION            ")?;
        if course.is_not_found() {
            writeln!(self.output, "Course \"{course_number}\" not found.")?;
            return writeln!(self.output, "{RULE}");
        }

        writeln!(self.output, "{course}")?;
        if course.prerequisites().is_empty() {
            writeln!(self.output, "No prerequisites")?;
        } else {
            writeln!(
                self.output,
                "Prerequisites: {}",
                course.prerequisites().join(", ")
            )?;
        }
        writeln!(self.output, "{RULE}")
    }
}
