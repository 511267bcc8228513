pub mod judge;
pub mod params;

use std::{
    fmt::Display,
    ops::{Index, IndexMut},
    time::Instant,
};

use proconio::input;
use smallvec::SmallVec;

/// 成長段階の最大値（収穫に必要な連結成分の最小サイズでもある）
pub const MAX_STAGE: u8 = 9;

#[derive(Debug, Clone)]
pub struct Input {
    n: usize,
    move_cnt: usize,
    field: Grid,
    since: Instant,
}

impl Input {
    pub fn read() -> Self {
        let since = Instant::now();

        input! {
            n: usize,
            move_cnt: usize,
            stages: [u8; n * n],
        }

        Self::new(n, move_cnt, Grid::from_vec(n, stages), since)
    }

    pub fn new(n: usize, move_cnt: usize, field: Grid, since: Instant) -> Self {
        assert_eq!(n, field.n());
        Self {
            n,
            move_cnt,
            field,
            since,
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn move_cnt(&self) -> usize {
        self.move_cnt
    }

    pub fn field(&self) -> &Grid {
        &self.field
    }

    pub fn since(&self) -> Instant {
        self.since
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn row(&self) -> usize {
        self.row
    }

    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    pub const fn to_index(&self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// 盤面内の4近傍（左・右・上・下の順）
    pub fn neighbors(&self, n: usize) -> SmallVec<[Coord; 4]> {
        let mut neighbors = SmallVec::new();

        if self.col > 0 {
            neighbors.push(Coord::new(self.row, self.col - 1));
        }

        if self.col + 1 < n {
            neighbors.push(Coord::new(self.row, self.col + 1));
        }

        if self.row > 0 {
            neighbors.push(Coord::new(self.row - 1, self.col));
        }

        if self.row + 1 < n {
            neighbors.push(Coord::new(self.row + 1, self.col));
        }

        neighbors
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// N×N の成長段階
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n: usize,
    stages: Vec<u8>,
}

impl Grid {
    pub fn new(n: usize, stage: u8) -> Self {
        Self {
            n,
            stages: vec![stage; n * n],
        }
    }

    pub fn from_vec(n: usize, stages: Vec<u8>) -> Self {
        assert_eq!(stages.len(), n * n);
        Self { n, stages }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn contains(&self, c: Coord) -> bool {
        c.row < self.n && c.col < self.n
    }
}

impl Index<Coord> for Grid {
    type Output = u8;

    fn index(&self, c: Coord) -> &Self::Output {
        &self.stages[c.to_index(self.n)]
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, c: Coord) -> &mut Self::Output {
        &mut self.stages[c.to_index(self.n)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Tend,
    Harvest,
}

impl MoveKind {
    pub const fn code(&self) -> u8 {
        match self {
            MoveKind::Tend => 1,
            MoveKind::Harvest => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    kind: MoveKind,
    coord: Coord,
}

impl Move {
    pub const fn new(kind: MoveKind, coord: Coord) -> Self {
        Self { kind, coord }
    }

    pub const fn tend(coord: Coord) -> Self {
        Self::new(MoveKind::Tend, coord)
    }

    pub const fn harvest(coord: Coord) -> Self {
        Self::new(MoveKind::Harvest, coord)
    }

    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    pub const fn coord(&self) -> Coord {
        self.coord
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.kind.code(),
            self.coord.row,
            self.coord.col
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn neighbors_test() {
        let n = 3;
        assert_eq!(
            Coord::new(0, 0).neighbors(n).as_slice(),
            &[Coord::new(0, 1), Coord::new(1, 0)]
        );
        assert_eq!(
            Coord::new(1, 1).neighbors(n).as_slice(),
            &[
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(0, 1),
                Coord::new(2, 1)
            ]
        );
        assert_eq!(
            Coord::new(2, 2).neighbors(n).as_slice(),
            &[Coord::new(2, 1), Coord::new(1, 2)]
        );
        assert!(Coord::new(0, 0).neighbors(1).is_empty());
    }

    #[test]
    fn grid_index_test() {
        let grid = Grid::from_vec(2, vec![0, 1, 2, 3]);
        assert_eq!(grid[Coord::new(0, 1)], 1);
        assert_eq!(grid[Coord::new(1, 0)], 2);
        assert!(grid.contains(Coord::new(1, 1)));
        assert!(!grid.contains(Coord::new(2, 0)));
    }

    #[test]
    fn move_display_test() {
        // 種類, 行, 列 の順に出力する
        assert_eq!(Move::tend(Coord::new(3, 5)).to_string(), "1 3 5");
        assert_eq!(Move::harvest(Coord::new(0, 7)).to_string(), "2 0 7");
    }
}
