use std::collections::VecDeque;

use anyhow::{bail, ensure, Result};

use super::{Coord, Input, Move, MoveKind, MAX_STAGE};

/// 手順を初期盤面に適用し、ルールに従ってスコアを計算する
#[cfg_attr(not(feature = "local"), allow(dead_code))]
pub fn judge(input: &Input, moves: &[Move]) -> Result<u32> {
    ensure!(
        moves.len() == input.move_cnt(),
        "expected {} moves, but got {}",
        input.move_cnt(),
        moves.len()
    );

    let mut grid = input.field().clone();
    let mut harvest = None;

    for (t, m) in moves.iter().enumerate() {
        let c = m.coord();
        ensure!(grid.contains(c), "move {} ({}) is out of bounds", t, m);

        match m.kind() {
            MoveKind::Tend => {
                ensure!(harvest.is_none(), "move {} ({}) follows a harvest", t, m);
                grid[c] = (grid[c] + 1).min(MAX_STAGE);
            }
            MoveKind::Harvest => {
                if harvest.is_some() {
                    bail!("move {} ({}) is a second harvest", t, m);
                }

                harvest = Some(c);
            }
        }
    }

    let Some(harvest) = harvest else {
        bail!("no harvest move");
    };

    if grid[harvest] != MAX_STAGE {
        return Ok(0);
    }

    let n = grid.n();
    let mut visited = vec![false; n * n];
    let mut queue = VecDeque::new();
    visited[harvest.to_index(n)] = true;
    queue.push_back(harvest);
    let mut count = 0;

    while let Some(c) = queue.pop_front() {
        count += 1;

        for next in neighbors(c, n) {
            let i = next.to_index(n);

            if grid[next] == MAX_STAGE && !visited[i] {
                visited[i] = true;
                queue.push_back(next);
            }
        }
    }

    let k = MAX_STAGE as u32;
    Ok(if count >= k { count * k } else { 0 })
}

#[cfg_attr(not(feature = "local"), allow(dead_code))]
fn neighbors(c: Coord, n: usize) -> impl Iterator<Item = Coord> {
    const DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

    DIRS.iter().filter_map(move |&(dr, dc)| {
        let row = c.row().checked_add_signed(dr)?;
        let col = c.col().checked_add_signed(dc)?;
        (row < n && col < n).then(|| Coord::new(row, col))
    })
}

#[cfg(test)]
mod test {
    use std::time::Instant;

    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        problem::Grid,
        solver::{candidate, harvest, scorer},
        util::XorShift32,
    };

    fn make_input(n: usize, move_cnt: usize, stage: u8) -> Input {
        Input::new(n, move_cnt, Grid::new(n, stage), Instant::now())
    }

    #[test]
    fn tend_then_harvest_test() {
        let input = make_input(3, 2, 8);
        let c = Coord::new(1, 2);
        assert_eq!(judge(&input, &[Move::tend(c), Move::harvest(c)]).unwrap(), 0);

        let input = make_input(3, 1, MAX_STAGE);
        assert_eq!(judge(&input, &[Move::harvest(c)]).unwrap(), 81);
    }

    #[test]
    fn harvest_immature_cell_test() {
        let input = make_input(3, 2, 7);
        let c = Coord::new(0, 0);
        assert_eq!(judge(&input, &[Move::tend(c), Move::harvest(c)]).unwrap(), 0);
    }

    #[test]
    fn invalid_moves_test() {
        let input = make_input(3, 2, 8);
        let c = Coord::new(0, 0);

        assert!(judge(&input, &[Move::harvest(c)]).is_err());
        assert!(judge(&input, &[Move::tend(c), Move::tend(c)]).is_err());
        assert!(judge(&input, &[Move::harvest(c), Move::tend(c)]).is_err());
        assert!(judge(&input, &[Move::harvest(c), Move::harvest(c)]).is_err());
        assert!(judge(&input, &[Move::tend(Coord::new(3, 0)), Move::harvest(c)]).is_err());
    }

    #[test]
    fn candidate_matches_judge_test() {
        let mut rng = Pcg64Mcg::seed_from_u64(5);

        for _ in 0..100 {
            let n = rng.gen_range(2..=10);
            let stages = (0..n * n)
                .map(|_| rng.gen_range(0..=MAX_STAGE))
                .collect_vec();
            let field = Grid::from_vec(n, stages.clone());
            let deficit = stages
                .iter()
                .map(|&s| (MAX_STAGE - s) as usize)
                .sum::<usize>();
            let seed = rng.gen::<u32>();

            let probe_input = Input::new(n, deficit + 1, field.clone(), Instant::now());
            let probe = candidate::build(&probe_input, &mut XorShift32::new(seed));
            let tends = &probe.moves()[..deficit];

            // マスの切れ目で手数を打ち切れば切り詰めは起きず、盤面は実際の手順と一致する
            let boundaries = (1..=tends.len())
                .filter(|&i| i == tends.len() || tends[i - 1].coord() != tends[i].coord())
                .collect_vec();

            if boundaries.is_empty() {
                continue;
            }

            let tend_cnt = boundaries[rng.gen_range(0..boundaries.len())];
            let input = Input::new(n, tend_cnt + 1, field, Instant::now());
            let built = candidate::build(&input, &mut XorShift32::new(seed));

            assert_eq!(&built.moves()[..tend_cnt], &tends[..tend_cnt]);
            assert_eq!(
                judge(&input, built.moves()).unwrap(),
                scorer::score(built.grid(), built.harvest_coord())
            );
        }
    }

    #[test]
    fn truncated_candidate_test() {
        // 段階0のマスは最後に取り出され、9手必要なところを1手で打ち切られる。
        // 探索時の盤面では育ち切った扱いなので全9マスが連結するが、実際は8マスしか育たない
        let start = candidate::build(&make_input(3, 1, 8), &mut XorShift32::default()).harvest_coord();
        let late = if start == Coord::new(0, 0) {
            Coord::new(2, 2)
        } else {
            Coord::new(0, 0)
        };

        let mut field = Grid::new(3, 8);
        field[late] = 0;
        let input = Input::new(3, 10, field, Instant::now());
        let built = candidate::build(&input, &mut XorShift32::default());

        assert_eq!(built.harvest_coord(), start);
        assert_eq!(built.moves()[8], Move::tend(late));
        assert_eq!(built.grid()[late], MAX_STAGE);

        let scored = scorer::score(built.grid(), built.harvest_coord());
        let judged = judge(&input, built.moves()).unwrap();
        assert_eq!(scored, 81);
        assert_eq!(judged, 0);
    }

    #[test]
    fn solver_output_is_valid_test() {
        let mut rng = Pcg64Mcg::seed_from_u64(6);
        let n = 10;
        let stages = (0..n * n)
            .map(|_| rng.gen_range(0..=MAX_STAGE))
            .collect_vec();
        let input = Input::new(n, 150, Grid::from_vec(n, stages), Instant::now());
        let result = harvest::search(
            &input,
            &mut XorShift32::default(),
            std::time::Duration::from_millis(30),
        );

        let judged = judge(&input, result.best.moves()).unwrap();
        assert!(judged <= result.score);
    }
}
