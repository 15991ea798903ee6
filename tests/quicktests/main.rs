mod op;
mod tree;

pub(crate) use op::{Key, Op};
