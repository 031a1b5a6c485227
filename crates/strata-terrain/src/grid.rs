//! The raster outputs of terrain generation: a height field and its derived
//! color field, stored row-major and linearized for the texture-upload
//! boundary.
//!
//! Linearization convention, used everywhere in this crate: the outer loop
//! runs over `z` (rows), the inner loop over `x`, so a cell lives at index
//! `z * width + x`. Linearization copies values into a newly owned buffer
//! and never changes them.

use crate::error::GenerationError;

/// An RGB color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A W×H grid of accretion counts in `[0, 255]`.
///
/// Created once per generation run and read-only afterwards; regeneration
/// replaces the whole grid rather than mutating it in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl HeightGrid {
    /// Create a new all-zero grid. Only generators construct grids.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![0; width as usize * height as usize],
        }
    }

    /// Reshape a row-major linear buffer back into a grid.
    ///
    /// The inverse of [`HeightGrid::linearize`]. A length mismatch is a
    /// configuration error.
    pub fn from_linear(width: u32, height: u32, cells: Vec<u8>) -> Result<Self, GenerationError> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(GenerationError::LengthMismatch {
                len: cells.len(),
                width,
                height,
                expected,
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The stored accretion count at `(x, z)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `z >= height`.
    pub fn get(&self, x: u32, z: u32) -> u8 {
        self.cells[self.idx(x, z)]
    }

    pub(crate) fn set(&mut self, x: u32, z: u32, value: u8) {
        let idx = self.idx(x, z);
        self.cells[idx] = value;
    }

    /// Increment the cell at `(x, z)` by one, saturating at 255.
    pub(crate) fn accrete(&mut self, x: u32, z: u32) {
        let idx = self.idx(x, z);
        self.cells[idx] = self.cells[idx].saturating_add(1);
    }

    /// Copy the grid into a row-major linear buffer of length `width * height`.
    pub fn linearize(&self) -> Vec<u8> {
        self.cells.clone()
    }

    /// Expand the grid into a row-major RGBA buffer of length
    /// `width * height * 4`: each count becomes an opaque gray pixel.
    pub fn to_grayscale_rgba(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.cells.len() * 4);
        for &h in &self.cells {
            pixels.extend_from_slice(&[h, h, h, 255]);
        }
        pixels
    }

    fn idx(&self, x: u32, z: u32) -> usize {
        z as usize * self.width as usize + x as usize
    }
}

/// A W×H grid of RGB cells derived from a [`HeightGrid`].
///
/// Same dimensions and layout convention as the height grid it was derived
/// from; never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGrid {
    width: u32,
    height: u32,
    cells: Vec<Rgb>,
}

impl ColorGrid {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![Rgb::new(0, 0, 0); width as usize * height as usize],
        }
    }

    /// Reshape a row-major buffer of packed RGB triples back into a grid.
    ///
    /// The inverse of [`ColorGrid::linearize`]. A length mismatch is a
    /// configuration error.
    pub fn from_linear(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, GenerationError> {
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(GenerationError::LengthMismatch {
                len: bytes.len(),
                width,
                height,
                expected,
            });
        }
        let cells = bytes
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The stored color at `(x, z)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `z >= height`.
    pub fn get(&self, x: u32, z: u32) -> Rgb {
        self.cells[self.idx(x, z)]
    }

    pub(crate) fn set(&mut self, x: u32, z: u32, color: Rgb) {
        let idx = self.idx(x, z);
        self.cells[idx] = color;
    }

    /// Copy the grid into a row-major buffer of packed RGB triples,
    /// length `width * height * 3`.
    pub fn linearize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.cells.len() * 3);
        for c in &self.cells {
            out.extend_from_slice(&[c.r, c.g, c.b]);
        }
        out
    }

    /// Expand the grid into a row-major RGBA buffer of length
    /// `width * height * 4` with fixed full-opacity alpha.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut pixels = Vec::with_capacity(self.cells.len() * 4);
        for c in &self.cells {
            pixels.extend_from_slice(&[c.r, c.g, c.b, 255]);
        }
        pixels
    }

    fn idx(&self, x: u32, z: u32) -> usize {
        z as usize * self.width as usize + x as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_grid_starts_zeroed() {
        let grid = HeightGrid::new(8, 4);
        assert_eq!(grid.dimensions(), (8, 4));
        for z in 0..4 {
            for x in 0..8 {
                assert_eq!(grid.get(x, z), 0);
            }
        }
    }

    #[test]
    fn test_height_grid_row_major_layout() {
        let mut grid = HeightGrid::new(4, 3);
        grid.set(3, 1, 200);

        let linear = grid.linearize();
        assert_eq!(linear.len(), 12);
        // z = 1, x = 3 lives at z * width + x = 7.
        assert_eq!(linear[7], 200);
        assert_eq!(linear.iter().filter(|&&v| v != 0).count(), 1);
    }

    #[test]
    fn test_height_grid_linearize_round_trip() {
        let mut grid = HeightGrid::new(16, 8);
        for z in 0..8 {
            for x in 0..16 {
                grid.set(x, z, ((x * 7 + z * 13) % 256) as u8);
            }
        }

        let rebuilt = HeightGrid::from_linear(16, 8, grid.linearize()).unwrap();
        assert_eq!(rebuilt, grid, "Round trip must reconstruct the grid exactly");
    }

    #[test]
    fn test_height_grid_from_linear_rejects_mismatch() {
        let result = HeightGrid::from_linear(4, 4, vec![0; 15]);
        assert!(matches!(
            result,
            Err(GenerationError::LengthMismatch { len: 15, expected: 16, .. })
        ));
    }

    #[test]
    fn test_height_grid_accrete_saturates() {
        let mut grid = HeightGrid::new(2, 2);
        for _ in 0..300 {
            grid.accrete(1, 1);
        }
        assert_eq!(grid.get(1, 1), 255, "Accretion must clamp at 255");
    }

    #[test]
    fn test_height_grid_grayscale_rgba() {
        let mut grid = HeightGrid::new(2, 1);
        grid.set(0, 0, 10);
        grid.set(1, 0, 250);

        let pixels = grid.to_grayscale_rgba();
        assert_eq!(pixels, vec![10, 10, 10, 255, 250, 250, 250, 255]);
    }

    #[test]
    fn test_color_grid_linearize_round_trip() {
        let mut grid = ColorGrid::new(4, 2);
        for z in 0..2 {
            for x in 0..4 {
                grid.set(x, z, Rgb::new(x as u8, z as u8, (x + z) as u8));
            }
        }

        let linear = grid.linearize();
        assert_eq!(linear.len(), 4 * 2 * 3);

        let rebuilt = ColorGrid::from_linear(4, 2, linear).unwrap();
        assert_eq!(rebuilt, grid, "Round trip must reconstruct the grid exactly");
    }

    #[test]
    fn test_color_grid_from_linear_rejects_mismatch() {
        let result = ColorGrid::from_linear(2, 2, vec![0; 11]);
        assert!(matches!(
            result,
            Err(GenerationError::LengthMismatch { len: 11, expected: 12, .. })
        ));
    }

    #[test]
    fn test_color_grid_rgba_has_opaque_alpha() {
        let mut grid = ColorGrid::new(2, 1);
        grid.set(0, 0, Rgb::new(1, 2, 3));
        grid.set(1, 0, Rgb::new(4, 5, 6));

        let pixels = grid.to_rgba();
        assert_eq!(pixels, vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
