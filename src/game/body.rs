use std::collections::VecDeque;

use super::heading::Heading;

/// A cell on the game grid
///
/// Coordinates are signed so a head that has just stepped off the left or
/// top edge is representable and caught by the bounds check instead of
/// wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell reached by moving one step in the given heading
    pub fn neighbor(&self, heading: Heading) -> Self {
        let (dx, dy) = heading.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn in_bounds(&self, grid_size: usize) -> bool {
        let n = grid_size as i32;
        self.x >= 0 && self.x < n && self.y >= 0 && self.y < n
    }
}

/// Why a tick ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionKind {
    /// Head left the grid
    OutOfBounds,
    /// Head ran into a body segment
    SelfHit,
}

/// Outcome of advancing the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the new head landed on the food cell
    pub grew: bool,
    /// Head position after the step
    pub new_head: Cell,
}

/// The snake: ordered cells, head at the front, plus its current heading
///
/// Knows how to advance and how to detect its own death, but nothing about
/// food placement or game-over policy; those belong to the orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeBody {
    cells: VecDeque<Cell>,
    heading: Heading,
}

impl SnakeBody {
    /// A length-1 snake at the center of a grid, heading right
    pub fn at_center(grid_size: usize) -> Self {
        let mid = (grid_size / 2) as i32;
        Self {
            cells: VecDeque::from([Cell::new(mid, mid)]),
            heading: Heading::Right,
        }
    }

    pub fn head(&self) -> Cell {
        // Invariant: length >= 1 for the whole lifetime of the body
        *self.cells.front().unwrap()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Head-first view of the occupied cells
    pub fn cells(&self) -> impl ExactSizeIterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Request a heading change for the next step
    ///
    /// An exact 180-degree reversal is silently dropped; it would drive the
    /// head into the neck on the very next tick. Last accepted request wins.
    pub fn set_heading(&mut self, heading: Heading) {
        if !self.heading.is_opposite(heading) {
            self.heading = heading;
        }
    }

    /// Advance one cell in the current heading
    ///
    /// The new head is prepended unconditionally; the tail is kept only when
    /// the head landed on `food`. Collision against walls or the body is NOT
    /// evaluated here — callers run `check_collision` after stepping.
    pub fn step(&mut self, food: Cell) -> StepOutcome {
        let new_head = self.head().neighbor(self.heading);
        self.cells.push_front(new_head);

        let grew = new_head == food;
        if !grew {
            self.cells.pop_back();
        }

        StepOutcome { grew, new_head }
    }

    /// Check the post-step head against the walls and the rest of the body
    ///
    /// Must run after `step`: a tail cell vacated this tick is already gone
    /// and correctly does not count as a self-hit.
    pub fn check_collision(&self, grid_size: usize) -> Option<CollisionKind> {
        let head = self.head();

        if !head.in_bounds(grid_size) {
            return Some(CollisionKind::OutOfBounds);
        }

        if self.cells.iter().skip(1).any(|&c| c == head) {
            return Some(CollisionKind::SelfHit);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(cells: &[(i32, i32)], heading: Heading) -> SnakeBody {
        SnakeBody {
            cells: cells.iter().map(|&(x, y)| Cell::new(x, y)).collect(),
            heading,
        }
    }

    #[test]
    fn test_center_start() {
        let body = SnakeBody::at_center(20);
        assert_eq!(body.len(), 1);
        assert_eq!(body.head(), Cell::new(10, 10));
        assert_eq!(body.heading(), Heading::Right);
    }

    #[test]
    fn test_step_without_food_keeps_length() {
        // Grid 20, start (10,10) heading right, food elsewhere
        let mut body = SnakeBody::at_center(20);
        let outcome = body.step(Cell::new(0, 0));

        assert!(!outcome.grew);
        assert_eq!(outcome.new_head, Cell::new(11, 10));
        assert_eq!(body.cells().collect::<Vec<_>>(), vec![Cell::new(11, 10)]);
    }

    #[test]
    fn test_step_onto_food_grows() {
        let mut body = body_of(&[(11, 10), (10, 10)], Heading::Right);
        let outcome = body.step(Cell::new(12, 10));

        assert!(outcome.grew);
        assert_eq!(body.len(), 3);
        assert_eq!(
            body.cells().collect::<Vec<_>>(),
            vec![Cell::new(12, 10), Cell::new(11, 10), Cell::new(10, 10)]
        );
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut body = SnakeBody::at_center(20);
        body.set_heading(Heading::Left);
        assert_eq!(body.heading(), Heading::Right);

        body.set_heading(Heading::Up);
        assert_eq!(body.heading(), Heading::Up);
        body.set_heading(Heading::Down);
        assert_eq!(body.heading(), Heading::Up);
    }

    #[test]
    fn test_out_of_bounds_left_edge() {
        let mut body = body_of(&[(0, 5)], Heading::Left);
        let outcome = body.step(Cell::new(9, 9));

        assert_eq!(outcome.new_head, Cell::new(-1, 5));
        assert_eq!(body.check_collision(20), Some(CollisionKind::OutOfBounds));
    }

    #[test]
    fn test_out_of_bounds_far_edge() {
        let mut body = body_of(&[(19, 19)], Heading::Down);
        body.step(Cell::new(0, 0));
        assert_eq!(body.check_collision(20), Some(CollisionKind::OutOfBounds));
    }

    #[test]
    fn test_hook_shape_no_false_self_hit() {
        // U-shaped body; heading up moves into open space
        let mut body = body_of(
            &[(5, 5), (5, 6), (5, 7), (6, 7), (6, 6), (6, 5)],
            Heading::Up,
        );
        let outcome = body.step(Cell::new(0, 0));

        assert_eq!(outcome.new_head, Cell::new(5, 4));
        assert_eq!(body.check_collision(20), None);
    }

    #[test]
    fn test_hook_shape_self_hit() {
        // Same shape but heading down drives the head onto (5,6)
        let mut body = body_of(
            &[(5, 5), (5, 6), (5, 7), (6, 7), (6, 6), (6, 5)],
            Heading::Down,
        );
        body.step(Cell::new(0, 0));
        assert_eq!(body.check_collision(20), Some(CollisionKind::SelfHit));
    }

    #[test]
    fn test_vacated_tail_is_not_a_self_hit() {
        // 2x2 loop: the head steps onto the cell the tail vacates this tick
        let mut body = body_of(&[(5, 6), (6, 6), (6, 5), (5, 5)], Heading::Up);
        let outcome = body.step(Cell::new(0, 0));

        assert_eq!(outcome.new_head, Cell::new(5, 5));
        assert_eq!(body.check_collision(20), None);
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn test_no_duplicates_after_clean_step() {
        let mut body = body_of(&[(5, 5), (4, 5), (3, 5)], Heading::Right);
        body.step(Cell::new(0, 0));

        let cells: Vec<_> = body.cells().collect();
        let unique: std::collections::HashSet<_> = cells.iter().copied().collect();
        assert_eq!(cells.len(), unique.len());
    }
}
