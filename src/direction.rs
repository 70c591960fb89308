#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
    /// No input yet; the snake stays put.
    #[default]
    Idle,
}

const OPPOSITE: [Direction; 5] = [
    Direction::Left,  // Right
    Direction::Right, // Left
    Direction::Down,  // Up
    Direction::Up,    // Down
    Direction::Idle,  // Idle
];

impl Direction {
    pub fn opposite(self) -> Direction {
        OPPOSITE[self as usize]
    }

    /// True when turning from `self` to `next` would fold the snake onto itself.
    pub fn reverses(self, next: Direction) -> bool {
        self != Direction::Idle && self.opposite() == next
    }

    /// Unit step on screen axes (y grows downward). `None` for `Idle`.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Direction::Right => Some((1, 0)),
            Direction::Left => Some((-1, 0)),
            Direction::Up => Some((0, -1)),
            Direction::Down => Some((0, 1)),
            Direction::Idle => None,
        }
    }
}
