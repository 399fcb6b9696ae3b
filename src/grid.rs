//! Halo-padded cell grid.
//!
//! Cells are stored byte-per-cell in a flat buffer of `(height + 2) *
//! (width + 2)` entries. The outermost ring (the halo) is permanently dead,
//! so neighbor lookups for interior cells never need boundary checks.

use rand::Rng;

/// A bounded Game of Life grid with a one-cell dead border.
///
/// Logical coordinates are 1-based: `(x, y)` with `1 <= x <= width` and
/// `1 <= y <= height` lives at linear index `y * pitch + x`, where
/// `pitch == width + 2`. Row 0, row `height + 1`, column 0, and column
/// `width + 1` are the halo and are never written by any stepper.
#[derive(Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    pitch: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Allocate a zeroed grid (all cells dead, halo included).
    pub fn new(width: usize, height: usize) -> Self {
        let pitch = width + 2;
        Self {
            width,
            height,
            pitch,
            cells: vec![0u8; (height + 2) * pitch],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Stride in cells between consecutive rows of the flat buffer.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.pitch
    }

    /// Total number of interior cells.
    #[inline]
    pub fn interior_len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!((1..=self.width).contains(&x), "x {x} out of interior");
        debug_assert!((1..=self.height).contains(&y), "y {y} out of interior");
        y * self.pitch + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)] != 0
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive as u8;
    }

    /// Flat cell storage, halo included.
    #[inline]
    pub(crate) fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Seed every interior cell independently from a uniform boolean draw.
    /// The halo is left untouched (dead).
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for y in 1..=self.height {
            let row = y * self.pitch;
            for x in 1..=self.width {
                self.cells[row + x] = rng.random::<bool>() as u8;
            }
        }
    }

    /// Kill every interior cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Read-only view of one interior row (`1 <= y <= height`), `width`
    /// cells long. This is the renderer-facing surface: `width * height`
    /// booleans in row-major order, halo excluded.
    #[inline]
    pub fn interior_row(&self, y: usize) -> &[u8] {
        debug_assert!((1..=self.height).contains(&y), "y {y} out of interior");
        let start = y * self.pitch + 1;
        &self.cells[start..start + self.width]
    }

    /// Visit every live interior cell as `(x, y)`.
    pub fn for_each_live<F: FnMut(usize, usize)>(&self, mut f: F) {
        for y in 1..=self.height {
            let row = self.interior_row(y);
            for (i, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    f(i + 1, y);
                }
            }
        }
    }

    /// Number of live interior cells.
    pub fn population(&self) -> u64 {
        let mut count = 0u64;
        for y in 1..=self.height {
            count += self.interior_row(y).iter().map(|&c| c as u64).sum::<u64>();
        }
        count
    }

    /// True if every halo cell is dead. The steppers never write the halo,
    /// so this holds for the lifetime of the grid.
    pub fn halo_is_dead(&self) -> bool {
        let top = &self.cells[..self.pitch];
        let bottom = &self.cells[(self.height + 1) * self.pitch..];
        if top.iter().any(|&c| c != 0) || bottom.iter().any(|&c| c != 0) {
            return false;
        }
        (1..=self.height).all(|y| {
            self.cells[y * self.pitch] == 0 && self.cells[y * self.pitch + self.width + 1] == 0
        })
    }
}
