/// Top-left corner of one grid square, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Drawable rectangle covering one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

/// Play field: `width` and `height` are multiples of `cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl Grid {
    pub fn new(width: u32, height: u32, cell: u32) -> Self {
        Self { width: width as i32, height: height as i32, cell: cell as i32 }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell
    }

    /// Where a fresh snake starts.
    pub fn center(&self) -> Cell {
        Cell::new((self.width - self.cell) / 2, (self.height - self.cell) / 2)
    }

    pub fn contains(&self, c: Cell) -> bool {
        (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y)
    }

    /// Torus wrap. Each axis is checked on its own, so a corner exit wraps both.
    pub fn wrap(&self, mut c: Cell) -> Cell {
        if c.x >= self.width {
            c.x = 0;
        }
        if c.x < 0 {
            c.x = self.width - self.cell;
        }
        if c.y >= self.height {
            c.y = 0;
        }
        if c.y < 0 {
            c.y = self.height - self.cell;
        }
        c
    }

    pub fn cell_at(&self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell, row * self.cell)
    }

    pub fn rect(&self, c: Cell) -> Rect {
        Rect { x: c.x, y: c.y, w: self.cell as u32, h: self.cell as u32 }
    }
}
