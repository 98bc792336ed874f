use alloc::vec;
use alloc::vec::Vec;

/// Static tint for a cell. Applied while the cell is alive, ignored while
/// it's dead.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub color: Rgb,
}

impl Cell {
    pub const fn dead(color: Rgb) -> Self {
        Self { alive: false, color }
    }
}

/// Double-buffered cell storage.
///
/// `current` is the generation the rule reads from; `next` is where results
/// land until [`CellGrid::commit`] copies them back. Keeping the two apart is
/// what stops a step from seeing neighbors it already updated.
///
/// Boundary policy: the grid is bounded, not toroidal. Reads outside
/// `[0, width) x [0, height)` are always dead, writes outside are ignored.
pub struct CellGrid {
    width: i32,
    height: i32,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl CellGrid {
    /// All cells dead and tinted white.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");

        let cells = vec![Cell::dead(Rgb::WHITE); width as usize * height as usize];
        Self {
            width,
            height,
            current: cells.clone(),
            next: cells,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if (0..self.width).contains(&x) && (0..self.height).contains(&y) {
            Some((x + y * self.width) as usize)
        } else {
            None
        }
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.current[i])
    }

    /// Off-grid cells read as dead.
    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(false, |i| self.current[i].alive)
    }

    /// Count of alive cells among the 8 neighbors, off-grid positions
    /// counting as dead.
    pub fn live_neighbors(&self, x: i32, y: i32) -> u8 {
        let mut count = 0;
        for dy in [-1, 0, 1] {
            for dx in [-1, 0, 1] {
                if (dx, dy) == (0, 0) {
                    continue;
                }

                count += self.is_alive(x + dx, y + dy) as u8;
            }
        }

        count
    }

    /// Writes a next-generation state without touching `current`.
    pub fn set_next(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.next[i].alive = alive;
        }
    }

    /// Copies every alive flag from `next` back into `current`, ending the
    /// generation. Colors are never copied; they're fixed at seeding time.
    pub fn commit(&mut self) {
        for (curr, next) in self.current.iter_mut().zip(&self.next) {
            curr.alive = next.alive;
        }
    }

    /// Seeding write that lands in *both* buffers, so initialization never
    /// leaves the two generations out of sync.
    pub fn seed(&mut self, x: i32, y: i32, alive: bool) {
        if let Some(i) = self.index(x, y) {
            self.current[i].alive = alive;
            self.next[i].alive = alive;
        }
    }

    pub fn set_color(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.current[i].color = color;
            self.next[i].color = color;
        }
    }
}
