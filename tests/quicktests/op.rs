use quickcheck::{Arbitrary, Gen};

/// Course numbers drawn from a small pool so that duplicates, case variants, and padded keys come
/// up often.
#[derive(Clone, Debug)]
pub(crate) struct Key(pub(crate) String);

const KEYS: &[&str] = &[
    "CS101", "cs101", "CS300", " CS300", "cs300\t", "CS050", "MATH201", "math201", "A", "b", "",
];

impl Arbitrary for Key {
    fn arbitrary(g: &mut Gen) -> Self {
        Key((*g.choose(KEYS).unwrap()).to_string())
    }
}

/// An enum for the various kinds of "things" to do to
/// course trees in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum Op {
    /// Insert a course with this number and title
    Insert(Key, String),
    /// Search for this course number
    Search(Key),
    /// Compare iterators
    Iter,
}

impl Arbitrary for Op {
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(Key::arbitrary(g), String::arbitrary(g)),
            1 => Op::Search(Key::arbitrary(g)),
            2 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
