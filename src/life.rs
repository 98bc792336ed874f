use alloc::vec;
use alloc::vec::Vec;

use rand::RngCore;

use crate::grid::{CellGrid, Rgb};

/// Conway's Game of Life over a bounded grid, plus the RGBA frame a display
/// uploads as a texture.
///
/// The frame buffer is `width * height * 4` bytes, row-major, one R,G,B,A
/// quad per cell. It's allocated once and overwritten in place: fully after
/// every [`Life::step`], and pixel-by-pixel as seeding calls touch cells, so
/// it's always safe to hand to a renderer.
pub struct Life {
    cells: CellGrid,
    frame: Vec<u8>,
}

impl Life {
    /// All cells start dead and tinted white, so the frame starts all black.
    pub fn new(width: i32, height: i32) -> Self {
        let cells = CellGrid::new(width, height);
        let mut life = Self {
            frame: vec![0; width as usize * height as usize * 4],
            cells,
        };
        life.render();

        life
    }

    pub fn width(&self) -> i32 {
        self.cells.width()
    }

    pub fn height(&self) -> i32 {
        self.cells.height()
    }

    /// Off-grid cells read as dead.
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.cells.is_alive(x, y)
    }

    /// Seeds one cell in both generations and refreshes its frame pixel.
    /// Off-grid writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, alive: bool) {
        self.cells.seed(x, y, alive);
        self.render_cell(x, y);
    }

    /// Retints one cell. Tints only show while the cell is alive.
    pub fn set_color(&mut self, x: i32, y: i32, color: Rgb) {
        self.cells.set_color(x, y, color);
        self.render_cell(x, y);
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.cells.seed(x, y, false);
            }
        }
        self.render();
    }

    /// Reseeds every cell with a 50/50 coin flip.
    pub fn clear_random(&mut self, rng: &mut impl RngCore) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.cells.seed(x, y, rng.next_u32() % 2 == 0);
            }
        }
        self.render();
    }

    /// Writes a glider that travels down and to the right:
    /// ```text
    /// .#.
    /// ..#
    /// ###
    /// ```
    pub fn write_right_glider(&mut self, x: i32, y: i32) {
        for (dx, dy) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            self.set(x + dx, y + dy, true);
        }
    }

    /// Writes a glider that travels down and to the left.
    pub fn write_left_glider(&mut self, x: i32, y: i32) {
        for (dx, dy) in [(1, 0), (0, 1), (0, 2), (1, 2), (2, 2)] {
            self.set(x + dx, y + dy, true);
        }
    }

    /// Writes a 2x2 block still life.
    pub fn write_block(&mut self, x: i32, y: i32) {
        for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            self.set(x + dx, y + dy, true);
        }
    }

    /// Advances the simulation by exactly one generation and reserializes the
    /// frame buffer. Returns the number of cells that changed state; `0`
    /// means the grid is stable and the display has nothing new to show.
    ///
    /// The rule reads only from the current generation. Results land in the
    /// next-generation buffer and are committed once every cell has been
    /// evaluated.
    pub fn step(&mut self) -> usize {
        let mut n_updated = 0;

        for y in 0..self.height() {
            for x in 0..self.width() {
                let n = self.cells.live_neighbors(x, y);
                let alive = if self.cells.is_alive(x, y) {
                    n == 2 || n == 3
                } else {
                    n == 3
                };

                if alive != self.cells.is_alive(x, y) {
                    n_updated += 1;
                }
                self.cells.set_next(x, y, alive);
            }
        }

        self.cells.commit();
        self.render();

        n_updated
    }

    /// The serialized current generation: row-major RGBA, one quad per cell.
    pub fn frame_rgba(&self) -> &[u8] {
        &self.frame
    }

    fn render(&mut self) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.render_cell(x, y);
            }
        }
    }

    // An alive cell shows its tint; a dead cell is opaque black, not the
    // background color. Every pixel ends up with alpha 255.
    fn render_cell(&mut self, x: i32, y: i32) {
        let Some(&cell) = self.cells.cell(x, y) else {
            return;
        };

        let Rgb { r, g, b } = if cell.alive { cell.color } else { Rgb::BLACK };
        let i = ((x + y * self.width()) * 4) as usize;
        self.frame[i..i + 4].copy_from_slice(&[r, g, b, 255]);
    }
}

#[cfg(test)]
mod t {
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Loads '#'/'.' rows into the top-left corner.
    fn write_rows(life: &mut Life, rows: &str) {
        for (y, row) in rows.lines().enumerate() {
            for (x, ch) in row.bytes().enumerate() {
                life.set(x as i32, y as i32, ch == b'#');
            }
        }
    }

    fn snapshot(life: &Life) -> String {
        let mut out = String::new();
        for y in 0..life.height() {
            for x in 0..life.width() {
                out.push(if life.get(x, y) { '#' } else { '.' });
            }
            out.push('\n');
        }

        out
    }

    /// The 8 positions around the center of a 5x5 grid.
    const RING: [(i32, i32); 8] = [
        (1, 1),
        (2, 1),
        (3, 1),
        (1, 2),
        (3, 2),
        (1, 3),
        (2, 3),
        (3, 3),
    ];

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn check_three_neighbors_mean_life(#[case] alive_now: bool) {
        let mut life = Life::new(5, 5);
        for &(x, y) in RING.iter().take(3) {
            life.set(x, y, true);
        }
        life.set(2, 2, alive_now);

        life.step();
        assert!(life.get(2, 2), "3 live neighbors always produce a live cell");
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    #[case(5)]
    #[case(6)]
    #[case(7)]
    #[case(8)]
    fn check_wrong_counts_mean_death(#[case] n: usize) {
        let mut life = Life::new(5, 5);
        for &(x, y) in RING.iter().take(n) {
            life.set(x, y, true);
        }
        life.set(2, 2, true);

        life.step();
        assert!(!life.get(2, 2), "center should die with {n} live neighbors");
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    fn check_survival(#[case] n: usize) {
        let mut life = Life::new(5, 5);
        for &(x, y) in RING.iter().take(n) {
            life.set(x, y, true);
        }
        life.set(2, 2, true);

        life.step();
        assert!(life.get(2, 2), "center should survive with {n} live neighbors");
    }

    #[test]
    fn check_all_dead_is_stable() {
        let mut life = Life::new(8, 8);

        assert_eq!(life.step(), 0);
        for y in 0..8 {
            for x in 0..8 {
                assert!(!life.get(x, y));
            }
        }
    }

    #[test]
    fn check_block_is_still() {
        let mut life = Life::new(6, 6);
        life.write_block(2, 2);
        let before = snapshot(&life);

        assert_eq!(life.step(), 0);
        assert_eq!(snapshot(&life), before);
    }

    #[test]
    fn check_blinker_oscillates() {
        let mut life = Life::new(5, 5);
        write_rows(
            &mut life,
            indoc! {"
                .....
                .....
                .###.
                .....
                .....
            "},
        );

        // Two cells die, two are born.
        assert_eq!(life.step(), 4);
        assert_eq!(
            snapshot(&life),
            indoc! {"
                .....
                ..#..
                ..#..
                ..#..
                .....
            "}
        );

        life.step();
        assert_eq!(
            snapshot(&life),
            indoc! {"
                .....
                .....
                .###.
                .....
                .....
            "}
        );
    }

    #[test]
    fn check_lonely_corner_dies() {
        let mut life = Life::new(4, 4);
        life.set(0, 0, true);

        // The corner has 3 in-bounds neighbors, all dead, and 5 off-grid
        // positions that must count as dead too.
        assert_eq!(life.step(), 1);
        assert!(!life.get(0, 0));
    }

    #[test]
    fn check_corner_block_is_still() {
        // A block flush against the corner only stays still if off-grid
        // neighbors read as dead instead of wrapping around.
        let mut life = Life::new(5, 5);
        life.write_block(0, 0);

        assert_eq!(life.step(), 0);
    }

    #[test]
    fn check_out_of_bounds_set_is_ignored() {
        let mut life = Life::new(3, 3);

        assert!(!life.get(-1, 0));
        assert!(!life.get(0, 3));

        life.set(-1, -1, true);
        life.set(3, 0, true);
        assert_eq!(life.step(), 0);
    }

    #[test]
    fn check_frame_serialization() {
        let mut life = Life::new(4, 3);
        assert_eq!(life.frame_rgba().len(), 4 * 3 * 4);

        life.set(2, 1, true);
        let i: usize = (2 + 1 * 4) * 4;
        assert_eq!(&life.frame_rgba()[i..i + 4], &[255, 255, 255, 255]);

        life.set(2, 1, false);
        assert_eq!(&life.frame_rgba()[i..i + 4], &[0, 0, 0, 255]);

        // Every dead pixel is opaque black.
        for px in life.frame_rgba().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, 255]);
        }
    }

    #[test]
    fn check_tinted_cells() {
        let mut life = Life::new(2, 2);
        life.set_color(0, 0, Rgb::new(10, 20, 30));

        life.set(0, 0, true);
        assert_eq!(&life.frame_rgba()[..4], &[10, 20, 30, 255]);

        // Dead cells serialize black, tinted or not.
        life.set(0, 0, false);
        assert_eq!(&life.frame_rgba()[..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn check_clear_random_then_clear() {
        use rand::{rngs::SmallRng, SeedableRng};

        let mut life = Life::new(16, 16);
        let mut rng = SmallRng::from_seed(core::array::from_fn(|_| 7));

        life.clear_random(&mut rng);
        let n_alive = (0..16)
            .flat_map(|y| (0..16).map(move |x| (x, y)))
            .filter(|&(x, y)| life.get(x, y))
            .count();
        assert!(n_alive > 0, "a 50/50 reseed of 256 cells left none alive?");

        life.clear();
        for px in life.frame_rgba().chunks_exact(4) {
            assert_eq!(px, &[0, 0, 0, 255]);
        }
    }
}
