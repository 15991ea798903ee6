use course_planner::course::Course;
use course_planner::tree::CourseTree;
use quickcheck_macros::quickcheck;

use crate::{Key, Op};

fn normalize(key: &str) -> String {
    key.trim_matches([' ', '\t']).to_ascii_uppercase()
}

/// What an in-order walk should give: the inserted courses sorted by raw course number, with
/// equal course numbers left in insertion order.
fn expected_order(inserted: &[Course]) -> Vec<Course> {
    let mut sorted = inserted.to_vec();
    sorted.sort_by(|a, b| a.course_number().cmp(b.course_number()));
    sorted
}

/// Applies a set of operations to a tree and a plain list of everything inserted, checking the
/// tree against the list after every search and walk.
fn do_ops(ops: &[Op]) -> bool {
    let mut tree = CourseTree::new();
    let mut inserted: Vec<Course> = Vec::new();

    for op in ops {
        let ok = match op {
            Op::Insert(Key(k), title) => {
                tree.insert(Course::new(k.as_str(), title.as_str()));
                inserted.push(Course::new(k.as_str(), title.as_str()));
                true
            }
            Op::Search(Key(k)) => {
                let search_agrees = tree.search(k) == tree.find(k).cloned().unwrap_or_default();
                let ok = match tree.find(k) {
                    // A hit must really match, and must be something that was inserted.
                    Some(found) => {
                        normalize(found.course_number()) == normalize(k)
                            && inserted.contains(found)
                    }
                    // When every stored key is already normalized, raw and normalized
                    // comparisons agree, so a miss means nothing matching was inserted. Otherwise
                    // case or padding variants may route the search elsewhere.
                    None => {
                        !inserted.iter().all(|c| normalize(c.course_number()) == c.course_number())
                            || inserted
                                .iter()
                                .all(|c| c.course_number() != normalize(k))
                    }
                };
                search_agrees && ok
            }
            Op::Iter => tree.iter().cloned().collect::<Vec<_>>() == expected_order(&inserted),
        };
        if !ok {
            return false;
        }
    }

    tree.len() == inserted.len() && tree.is_empty() == inserted.is_empty()
}

#[quickcheck]
fn fuzz_multiple_operations(ops: Vec<Op>) -> bool {
    do_ops(&ops)
}

#[quickcheck]
fn fuzz_normalized_keys(ops: Vec<Op>) -> bool {
    // Same operations, but every inserted key is stored already normalized, so every search for
    // an inserted key has to hit.
    let ops: Vec<Op> = ops
        .into_iter()
        .map(|op| match op {
            Op::Insert(Key(k), title) => Op::Insert(Key(normalize(&k)), title),
            other => other,
        })
        .collect();
    do_ops(&ops)
}

#[quickcheck]
fn walk_is_sorted_and_stable(keys: Vec<u8>) -> bool {
    let courses: Vec<Course> = keys
        .iter()
        .enumerate()
        .map(|(i, k)| Course::new(format!("K{:02X}", k % 32), i.to_string()))
        .collect();
    let tree: CourseTree = courses.iter().cloned().collect();

    tree.iter().cloned().collect::<Vec<_>>() == expected_order(&courses)
        && tree.iter().len() == courses.len()
}

#[quickcheck]
fn search_finds_first_inserted(keys: Vec<u8>) -> bool {
    // Uppercase, unpadded keys normalize to themselves, so search follows the insertion path.
    let mut tree = CourseTree::new();
    for (i, k) in keys.iter().enumerate() {
        tree.insert(Course::new(format!("K{:02X}", k % 32), i.to_string()));
    }

    keys.iter().all(|k| {
        let key = format!("K{:02X}", k % 32);
        let first = keys.iter().position(|other| other % 32 == k % 32).unwrap();
        let found = tree.search(&format!(" {} ", key.to_lowercase()));
        found.course_number() == key && found.title() == first.to_string()
    })
}

#[quickcheck]
fn contains_not(keys: Vec<u8>, nots: Vec<u8>) -> bool {
    let tree: CourseTree = keys
        .iter()
        .map(|k| Course::new(format!("K{k:03}"), ""))
        .collect();

    nots.iter()
        .filter(|n| !keys.contains(n))
        .all(|n| tree.search(&format!("K{n:03}")) == Course::default())
}

#[quickcheck]
fn prerequisites_round_trip(prerequisites: Vec<String>) -> bool {
    let mut tree = CourseTree::new();
    tree.insert(Course::new("CS100", "None"));
    tree.insert(Course::new("CS200", "Some").with_prerequisites(prerequisites.iter().cloned()));

    tree.search("cs200").prerequisites() == prerequisites.as_slice()
        && tree.search("cs100").prerequisites().is_empty()
}
