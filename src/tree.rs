//! An unbalanced Binary Search Tree of [`Course`]s keyed by course number.
//!
//! Insertion orders nodes by the raw course number (case-sensitive, byte-wise). Keys that compare
//! equal go to the right, so duplicates are kept and come out of an in-order walk in the order
//! they were inserted. Nothing ever rebalances the tree: inserting already-sorted course numbers
//! produces a tree shaped like a linked list. Searching, walking, and dropping such a tree never
//! recurse, so that shape is slow but never overflows the stack.
//!
//! Searching is more forgiving than insertion. The search key and every course number it is
//! compared against are stripped of surrounding spaces and tabs and uppercased first.
//!
//! # Examples
//!
//! ```
//! use course_planner::course::Course;
//! use course_planner::tree::CourseTree;
//!
//! let mut tree = CourseTree::new();
//! assert!(tree.is_empty());
//!
//! tree.insert(Course::new("CS300", "Intro"));
//! tree.insert(Course::new("CS101", "Advanced"));
//! tree.insert(Course::new("CS050", "Basics").with_prerequisites(["MATH100"]));
//!
//! let numbers: Vec<_> = tree.iter().map(|c| c.course_number()).collect();
//! assert_eq!(numbers, ["CS050", "CS101", "CS300"]);
//!
//! // Lookups ignore case and surrounding whitespace.
//! let found = tree.search(" cs050\t");
//! assert_eq!(found.title(), "Basics");
//! assert_eq!(found.prerequisites(), ["MATH100"]);
//!
//! // A miss gives back the empty course.
//! assert!(tree.search("CS999").is_not_found());
//! ```

use std::fmt;
use std::io;
use std::iter::FusedIterator;
use std::mem;

use tracing::trace;

use crate::course::Course;
use crate::util::normalize_key;

/// A subtree: either nothing, or a node that owns both of its children.
enum Tree {
    Leaf,
    Node(Box<Node>),
}

impl Tree {
    fn take(&mut self) -> Option<Box<Node>> {
        match mem::replace(self, Tree::Leaf) {
            Tree::Leaf => None,
            Tree::Node(node) => Some(node),
        }
    }
}

struct Node {
    course: Course,
    left: Tree,
    right: Tree,
}

impl Node {
    fn new(course: Course) -> Self {
        Self {
            course,
            left: Tree::Leaf,
            right: Tree::Leaf,
        }
    }
}

/// A catalog of courses kept in course number order.
///
/// There is no way to remove a course: a tree only ever goes from empty to non-empty.
pub struct CourseTree {
    root: Tree,
    len: usize,
}

impl Default for CourseTree {
    fn default() -> Self {
        Self::new()
    }
}

impl CourseTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            root: Tree::Leaf,
            len: 0,
        }
    }

    /// Whether no course has been inserted yet.
    pub fn is_empty(&self) -> bool {
        matches!(self.root, Tree::Leaf)
    }

    /// The number of courses in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::course::Course;
    /// use course_planner::tree::CourseTree;
    ///
    /// // Sorted input makes every node the right child of the previous one.
    /// let tree: CourseTree = ["A", "B", "C", "D"]
    ///     .into_iter()
    ///     .map(|n| Course::new(n, n))
    ///     .collect();
    ///
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();
        if let Tree::Node(root) = &self.root {
            stack.push((&**root, 1));
        }

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [&node.left, &node.right] {
                if let Tree::Node(child) = child {
                    stack.push((&**child, depth + 1));
                }
            }
        }

        height
    }

    /// Adds a course to the tree. This always succeeds.
    ///
    /// The course goes left of any node whose course number is strictly greater and right of any
    /// other, so a course number that is already present is added again rather than replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::course::Course;
    /// use course_planner::tree::CourseTree;
    ///
    /// let mut tree = CourseTree::new();
    /// tree.insert(Course::new("CS101", "First"));
    /// tree.insert(Course::new("CS101", "Second"));
    ///
    /// let titles: Vec<_> = tree.iter().map(|c| c.title()).collect();
    /// assert_eq!(titles, ["First", "Second"]);
    /// ```
    pub fn insert(&mut self, course: Course) {
        let mut depth = 1;
        let mut cursor = &mut self.root;
        while let Tree::Node(node) = cursor {
            cursor = if course.course_number() < node.course.course_number() {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }

        trace!(course_number = course.course_number(), depth, "inserted course");
        *cursor = Tree::Node(Box::new(Node::new(course)));
        self.len += 1;
    }

    /// Finds the course whose course number matches `course_number`, ignoring case and
    /// surrounding spaces and tabs. If more than one course matches, the first one met walking
    /// down from the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::course::Course;
    /// use course_planner::tree::CourseTree;
    ///
    /// let mut tree = CourseTree::new();
    /// tree.insert(Course::new("MATH201", "Discrete Mathematics"));
    ///
    /// assert_eq!(tree.find("math201").map(Course::title), Some("Discrete Mathematics"));
    /// assert_eq!(tree.find("MATH202"), None);
    /// ```
    pub fn find(&self, course_number: &str) -> Option<&Course> {
        let key = normalize_key(course_number);
        let mut cursor = &self.root;
        while let Tree::Node(node) = cursor {
            let node_key = normalize_key(node.course.course_number());
            if key == node_key {
                return Some(&node.course);
            }
            cursor = if key < node_key {
                &node.left
            } else {
                &node.right
            };
        }

        None
    }

    /// Like [`find`][Self::find] but returns a copy of the course. On a miss this returns the
    /// empty [`Course::default`], which callers check with [`Course::is_not_found`].
    pub fn search(&self, course_number: &str) -> Course {
        self.find(course_number).cloned().unwrap_or_default()
    }

    /// Walks the courses in course number order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Writes one `"<course number>, <title>"` line per course, in course number order. Writes
    /// nothing for an empty tree.
    ///
    /// # Errors
    ///
    /// Returns any error from writing to `out`.
    ///
    /// # Examples
    ///
    /// ```
    /// use course_planner::course::Course;
    /// use course_planner::tree::CourseTree;
    ///
    /// let mut tree = CourseTree::new();
    /// tree.insert(Course::new("CS300", "Intro"));
    /// tree.insert(Course::new("CS050", "Basics"));
    ///
    /// let mut out = Vec::new();
    /// tree.print_course_list(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "CS050, Basics\nCS300, Intro\n");
    /// ```
    pub fn print_course_list<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for course in self {
            writeln!(out, "{course}")?;
        }
        Ok(())
    }
}

impl Drop for CourseTree {
    /// Frees every node, left subtree then right subtree then the node itself, without recursing.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let left = node.left.take();
            let right = node.right.take();
            if left.is_none() && right.is_none() {
                continue;
            }

            // Come back to this node once both children are gone.
            stack.push(node);
            stack.extend(right);
            stack.extend(left);
        }
    }
}

impl fmt::Debug for CourseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<Course> for CourseTree {
    fn extend<I: IntoIterator<Item = Course>>(&mut self, courses: I) {
        for course in courses {
            self.insert(course);
        }
    }
}

impl FromIterator<Course> for CourseTree {
    fn from_iter<I: IntoIterator<Item = Course>>(courses: I) -> Self {
        let mut tree = Self::new();
        tree.extend(courses);
        tree
    }
}

impl<'a> IntoIterator for &'a CourseTree {
    type Item = &'a Course;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An in-order walk over a [`CourseTree`]. Call [`CourseTree::iter`] again to start over.
pub struct Iter<'a> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a CourseTree) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(&tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut tree: &'a Tree) {
        while let Tree::Node(node) = tree {
            self.stack.push(&**node);
            tree = &node.left;
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Course;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining -= 1;
        Some(&node.course)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
