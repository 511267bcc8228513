use std::collections::BinaryHeap;

use log::warn;
use rand::Rng;

use crate::problem::{Coord, Grid, Input, Move, MAX_STAGE};

/// 手順の候補と、世話をすべて適用した後の盤面
#[derive(Debug, Clone)]
pub struct Candidate {
    moves: Vec<Move>,
    grid: Grid,
}

impl Candidate {
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// 最後の手（収穫）の座標
    pub fn harvest_coord(&self) -> Coord {
        self.moves
            .last()
            .map(|m| m.coord())
            .expect("candidate always ends with a harvest")
    }

    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

/// ランダムな始点から段階の高いマスを優先して育て、始点で収穫する手順を作る。
///
/// 世話の手はちょうど `M - 1` 手に切り詰めるため、最後に取り出したマスは
/// 最大段階まで育ち切らないことがある。盤面上はそのマスも最大段階として扱う。
pub fn build(input: &Input, rng: &mut impl Rng) -> Candidate {
    let n = input.n();
    let tend_cnt = input.move_cnt().saturating_sub(1);

    let mut grid = input.field().clone();
    let mut visited = vec![false; n * n];
    let mut frontier = BinaryHeap::new();
    let mut moves = Vec::with_capacity(tend_cnt + MAX_STAGE as usize + 1);

    let col = rng.next_u32() as usize % n;
    let row = rng.next_u32() as usize % n;
    let start = Coord::new(row, col);

    frontier.push((grid[start], start));
    visited[start.to_index(n)] = true;

    while moves.len() < tend_cnt {
        let Some((stage, c)) = frontier.pop() else {
            warn!(
                "frontier exhausted after {} / {} tend moves",
                moves.len(),
                tend_cnt
            );
            break;
        };

        for _ in stage..MAX_STAGE {
            moves.push(Move::tend(c));
        }

        grid[c] = MAX_STAGE;

        for next in c.neighbors(n) {
            let i = next.to_index(n);

            if !visited[i] {
                visited[i] = true;
                frontier.push((grid[next], next));
            }
        }
    }

    moves.truncate(tend_cnt);

    // 盤面全体を育て切った場合は始点への世話で手数を埋める
    moves.resize(tend_cnt, Move::tend(start));
    moves.push(Move::harvest(start));

    Candidate { moves, grid }
}
