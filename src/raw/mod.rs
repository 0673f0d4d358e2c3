mod insert;
mod node;
mod remove;
mod rotate;
mod validate;

pub(crate) use node::{Node, Subtree};
