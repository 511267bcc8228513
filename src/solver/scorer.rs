use crate::problem::{Coord, Grid, MAX_STAGE};

/// 収穫マスから最大段階のマスを4近傍で辿った連結成分の大きさを数え、
/// `MAX_STAGE` マス以上なら `大きさ * MAX_STAGE` を、そうでなければ0を返す。
pub fn score(grid: &Grid, harvest: Coord) -> u32 {
    let n = grid.n();
    let mut visited = vec![false; n * n];
    let mut stack = vec![harvest];
    visited[harvest.to_index(n)] = true;
    let mut count = 0;

    while let Some(c) = stack.pop() {
        count += 1;

        for next in c.neighbors(n) {
            let i = next.to_index(n);

            if grid[next] == MAX_STAGE && !visited[i] {
                visited[i] = true;
                stack.push(next);
            }
        }
    }

    let k = MAX_STAGE as u32;

    if count >= k {
        count * k
    } else {
        0
    }
}
