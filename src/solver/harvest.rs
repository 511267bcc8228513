use std::time::Duration;

use log::{debug, info};
use rand::Rng;

use super::{
    candidate::{self, Candidate},
    scorer, Solver,
};
use crate::{
    problem::{params::Params, Input, Move},
    util::{ChangeMinMax, Timer, XorShift32},
};

pub struct HarvestSolver;

impl Solver for HarvestSolver {
    fn solve(&self, input: &Input) -> Vec<Move> {
        let params = Params::get();
        let mut rng = XorShift32::new(params.seed);
        let result = search(
            input,
            &mut rng,
            Duration::from_millis(params.time_limit_ms),
        );

        info!("score: {}", result.score);
        info!("iter: {}", result.iter);
        info!("search time: {}ms", result.elapsed.as_millis());

        result.best.into_moves()
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best: Candidate,
    pub score: u32,
    pub iter: usize,
    pub elapsed: Duration,
}

/// 制限時間まで候補を作り続け、スコアが真に大きいものだけで最良解を更新する。
/// 時間判定は候補1つを作り終えるごとにしか行わない。
pub fn search(input: &Input, rng: &mut impl Rng, time_limit: Duration) -> SearchResult {
    let mut best = candidate::build(input, rng);
    let mut best_score = scorer::score(best.grid(), best.harvest_coord());
    debug!("seed score: {}", best_score);

    let timer = Timer::start(time_limit);
    let mut iter = 0;

    while !timer.is_expired() {
        iter += 1;
        let next = candidate::build(input, rng);
        let score = scorer::score(next.grid(), next.harvest_coord());

        if best_score.change_max(score) {
            debug!("score updated: {} (iter {})", score, iter);
            best = next;
        }
    }

    SearchResult {
        best,
        score: best_score,
        iter,
        elapsed: timer.elapsed(),
    }
}
