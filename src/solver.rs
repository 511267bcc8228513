pub mod candidate;
pub mod harvest;
pub mod scorer;

use crate::problem::{Input, Move};

pub trait Solver {
    fn solve(&self, input: &Input) -> Vec<Move>;
}
