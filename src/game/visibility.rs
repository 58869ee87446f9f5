//! # Visibility Engine
//!
//! Field-of-view over the tile grid using symmetric recursive shadow casting.
//! The map is scanned one quadrant at a time, row by row outward from the
//! observer; opaque tiles split a row into separately scanned slope ranges.
//! Slopes are kept as exact fractions so results never depend on float
//! rounding.

use crate::{Grid, Position};

/// Per-tile transparency and walkability derived from the grid, plus the set
/// of tiles currently in view.
#[derive(Debug, Clone)]
pub struct FovMap {
    width: i32,
    height: i32,
    transparent: Vec<bool>,
    walkable: Vec<bool>,
    visible: Vec<bool>,
}

impl FovMap {
    /// Builds the map from the grid's current terrain. Nothing is visible yet.
    pub fn from_grid(grid: &Grid) -> Self {
        let len = (grid.width * grid.height) as usize;
        let mut transparent = Vec::with_capacity(len);
        let mut walkable = Vec::with_capacity(len);
        for pos in grid.positions() {
            transparent.push(!grid.blocks_sight(pos));
            walkable.push(!grid.is_blocked_tile(pos));
        }
        Self {
            width: grid.width,
            height: grid.height,
            transparent,
            walkable,
            visible: vec![false; len],
        }
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    pub fn is_transparent(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.transparent[i])
    }

    pub fn is_walkable(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.walkable[i])
    }

    /// Whether the tile was in view at the last computation.
    pub fn is_in_fov(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.visible[i])
    }

    /// Positions currently in view.
    pub fn visible_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.visible
            .iter()
            .enumerate()
            .filter(|(_, &seen)| seen)
            .map(move |(i, _)| Position::new(i as i32 % self.width, i as i32 / self.width))
    }

    fn reveal(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.visible[i] = true;
        }
    }

    /// Recomputes the visible set from `origin` within a Euclidean `radius`.
    ///
    /// Opaque tiles on the edge of the lit area are visible themselves, so
    /// room walls light up while anything behind them stays dark.
    pub fn compute(&mut self, origin: Position, radius: i32) {
        self.visible.iter_mut().for_each(|seen| *seen = false);
        if self.index(origin).is_none() {
            return;
        }
        self.reveal(origin);
        for quadrant in Quadrant::ALL {
            let first = Row {
                depth: 1,
                start: Slope::new(-1, 1),
                end: Slope::new(1, 1),
            };
            self.scan(origin, radius, quadrant, first);
        }
    }

    fn scan(&mut self, origin: Position, radius: i32, quadrant: Quadrant, mut row: Row) {
        if row.depth > radius {
            return;
        }
        let mut prev_opaque: Option<bool> = None;
        for col in row.min_col()..=row.max_col() {
            let pos = quadrant.transform(origin, row.depth, col);
            let opaque = !self.is_transparent(pos);
            let in_range = col * col + row.depth * row.depth <= radius * radius;

            if in_range && (opaque || row.is_symmetric(col)) {
                self.reveal(pos);
            }
            match prev_opaque {
                Some(true) if !opaque => row.start = Slope::tile_edge(row.depth, col),
                Some(false) if opaque => {
                    let mut next = row.next();
                    next.end = Slope::tile_edge(row.depth, col);
                    self.scan(origin, radius, quadrant, next);
                }
                _ => {}
            }
            prev_opaque = Some(opaque);
        }
        if prev_opaque == Some(false) {
            self.scan(origin, radius, quadrant, row.next());
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Quadrant {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [Quadrant::North, Quadrant::East, Quadrant::South, Quadrant::West];

    fn transform(self, origin: Position, depth: i32, col: i32) -> Position {
        match self {
            Quadrant::North => Position::new(origin.x + col, origin.y - depth),
            Quadrant::South => Position::new(origin.x + col, origin.y + depth),
            Quadrant::East => Position::new(origin.x + depth, origin.y + col),
            Quadrant::West => Position::new(origin.x - depth, origin.y + col),
        }
    }
}

/// Exact fraction `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy)]
struct Slope {
    num: i32,
    den: i32,
}

impl Slope {
    fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// Slope of the left edge of the tile at `(depth, col)`.
    fn tile_edge(depth: i32, col: i32) -> Self {
        Self::new(2 * col - 1, 2 * depth)
    }
}

#[derive(Debug, Clone, Copy)]
struct Row {
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    /// `floor(depth * start + 1/2)`
    fn min_col(&self) -> i32 {
        (2 * self.depth * self.start.num + self.start.den).div_euclid(2 * self.start.den)
    }

    /// `ceil(depth * end - 1/2)`
    fn max_col(&self) -> i32 {
        -(-(2 * self.depth * self.end.num - self.end.den)).div_euclid(2 * self.end.den)
    }

    /// Whether a floor tile's center lies within the row's slope range.
    fn is_symmetric(&self, col: i32) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }

    fn next(&self) -> Row {
        Row {
            depth: self.depth + 1,
            start: self.start,
            end: self.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn open_room(width: i32, height: i32) -> Grid {
        let mut grid = Grid::new(width, height);
        for y in 1..height - 1 {
            for x in 1..width - 1 {
                grid.carve(Position::new(x, y)).unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_origin_and_walls_visible_in_open_room() {
        let grid = open_room(9, 9);
        let mut fov = FovMap::from_grid(&grid);
        fov.compute(Position::new(4, 4), 10);

        assert!(fov.is_in_fov(Position::new(4, 4)));
        for pos in grid.positions() {
            assert!(fov.is_in_fov(pos), "{:?} should be visible", pos);
        }
    }

    #[test]
    fn test_radius_limits_view() {
        let grid = open_room(30, 5);
        let mut fov = FovMap::from_grid(&grid);
        fov.compute(Position::new(2, 2), 5);

        assert!(fov.is_in_fov(Position::new(7, 2)));
        assert!(!fov.is_in_fov(Position::new(8, 2)));
        assert!(!fov.is_in_fov(Position::new(20, 2)));
    }

    #[test]
    fn test_wall_hides_tiles_behind_it() {
        let mut grid = open_room(15, 9);
        for y in 0..9 {
            grid.set_tile(Position::new(7, y), crate::Tile::wall()).unwrap();
        }
        let mut fov = FovMap::from_grid(&grid);
        fov.compute(Position::new(3, 4), 10);

        assert!(fov.is_in_fov(Position::new(7, 4)));
        for y in 0..9 {
            for x in 8..15 {
                assert!(!fov.is_in_fov(Position::new(x, y)));
            }
        }
    }

    #[test]
    fn test_pillar_casts_shadow() {
        let mut grid = open_room(15, 9);
        grid.set_tile(Position::new(5, 4), crate::Tile::wall()).unwrap();
        let mut fov = FovMap::from_grid(&grid);
        fov.compute(Position::new(3, 4), 10);

        assert!(fov.is_in_fov(Position::new(5, 4)));
        assert!(!fov.is_in_fov(Position::new(6, 4)));
        assert!(!fov.is_in_fov(Position::new(9, 4)));
        assert!(fov.is_in_fov(Position::new(6, 2)));
    }

    #[test]
    fn test_visibility_is_symmetric_between_floor_tiles() {
        let mut grid = open_room(16, 12);
        for pos in [(4, 3), (7, 6), (10, 4), (5, 8), (12, 9), (9, 9)] {
            grid.set_tile(Position::new(pos.0, pos.1), crate::Tile::wall())
                .unwrap();
        }
        let floors: Vec<Position> = grid
            .positions()
            .filter(|&pos| !grid.is_blocked_tile(pos))
            .collect();

        let mut fov = FovMap::from_grid(&grid);
        let mut seen = std::collections::HashSet::new();
        for &from in &floors {
            fov.compute(from, 8);
            for &to in &floors {
                if fov.is_in_fov(to) {
                    seen.insert((from, to));
                }
            }
        }
        for &(from, to) in &seen {
            assert!(seen.contains(&(to, from)), "{:?} sees {:?} but not back", from, to);
        }
    }

    #[test]
    fn test_visible_positions_matches_queries() {
        let grid = open_room(7, 7);
        let mut fov = FovMap::from_grid(&grid);
        fov.compute(Position::new(3, 3), 2);
        let visible: Vec<Position> = fov.visible_positions().collect();
        assert!(visible.contains(&Position::new(3, 3)));
        assert!(visible.iter().all(|&pos| fov.is_in_fov(pos)));
    }

    #[test]
    fn test_walkable_mirrors_grid() {
        let grid = open_room(5, 5);
        let fov = FovMap::from_grid(&grid);
        assert!(fov.is_walkable(Position::new(2, 2)));
        assert!(!fov.is_walkable(Position::new(0, 0)));
        assert!(!fov.is_walkable(Position::new(9, 9)));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn view_stays_within_radius(
            pillars in proptest::collection::vec((1..19i32, 1..13i32), 0..20),
            ox in 1..19i32,
            oy in 1..13i32,
            radius in 1..10i32,
        ) {
            let mut grid = open_room(20, 14);
            for (x, y) in pillars {
                grid.set_tile(Position::new(x, y), crate::Tile::wall()).unwrap();
            }
            let origin = Position::new(ox, oy);
            let mut fov = FovMap::from_grid(&grid);
            fov.compute(origin, radius);

            prop_assert!(fov.is_in_fov(origin));
            for pos in fov.visible_positions() {
                let (dx, dy) = (pos.x - origin.x, pos.y - origin.y);
                prop_assert!(dx * dx + dy * dy <= radius * radius);
            }
        }
    }
}
