use crate::geometry::Cell;
use std::collections::VecDeque;

/// Ordered body segments, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    pub fn new(head: Cell) -> Self {
        let mut body = VecDeque::new();
        body.push_back(head);
        Self { body }
    }

    /// Builds a snake from explicit segments, head first.
    /// Returns `None` for an empty iterator.
    pub fn from_segments<I: IntoIterator<Item = Cell>>(segments: I) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() { None } else { Some(Self { body }) }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, c: Cell) -> bool {
        self.body.iter().any(|&s| s == c)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Whether a head moved to `next` lands on a segment that is still
    /// occupied after the shift. The current tail moves away, so it is skipped.
    pub fn collides_after_move(&self, next: Cell) -> bool {
        if self.body.len() < 2 {
            return false;
        }
        self.body.iter().take(self.body.len() - 1).any(|&s| s == next)
    }

    /// Puts the head on `new_head` and slides every other segment into the
    /// spot its predecessor held. Returns the cell the tail just left.
    pub fn slide(&mut self, new_head: Cell) -> Cell {
        let mut carried = new_head;
        for seg in self.body.iter_mut() {
            carried = std::mem::replace(seg, carried);
        }
        carried
    }

    pub fn grow(&mut self, at: Cell) {
        self.body.push_back(at);
    }
}
