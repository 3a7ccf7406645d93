//! RGBA raster rendering for automaton state.
//!
//! This is the presentation side of the simulation boundary: live cells are
//! painted as filled squares in a caller-supplied accent color, dead cells
//! show the background. All styling is explicit configuration - the
//! simulators know nothing about colors and the renderer knows nothing
//! about themes.
//!
//! # Example
//!
//! ```
//! use weft_automata::GridAutomaton;
//! use weft_raster::{render_grid, CellStyle};
//!
//! let mut grid = GridAutomaton::new(8).unwrap();
//! grid.set(1, 1, true);
//!
//! let style = CellStyle::default();
//! let raster = render_grid(&grid, &style);
//! assert_eq!(raster.width(), 80);
//! assert_eq!(raster.pixel(12, 12), Some(style.accent));
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::path::Path;

use image::{ImageResult, Rgba, RgbaImage};
use weft_automata::{GridAutomaton, RowAutomaton};

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// The default accent (#3b82f6).
    pub const ACCENT: Self = Self::opaque(0x3b, 0x82, 0xf6);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

impl From<Rgba8> for Rgba<u8> {
    fn from(c: Rgba8) -> Self {
        Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Rgba<u8>> for Rgba8 {
    fn from(c: Rgba<u8>) -> Self {
        let [r, g, b, a] = c.0;
        Self { r, g, b, a }
    }
}

/// How cells are painted.
///
/// Cells are `cell_size` pixels on a side; the filled square is one pixel
/// smaller, leaving a gutter that makes the lattice readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellStyle {
    /// Edge length of one cell in pixels.
    pub cell_size: u32,
    /// Fill color for live cells.
    pub accent: Rgba8,
    /// Color for dead cells and the gutter.
    pub background: Rgba8,
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            cell_size: 10,
            accent: Rgba8::ACCENT,
            background: Rgba8::TRANSPARENT,
        }
    }
}

impl CellStyle {
    /// Side length of the filled square for a live cell.
    fn square(&self) -> u32 {
        if self.cell_size > 1 {
            self.cell_size - 1
        } else {
            1
        }
    }
}

/// An owned RGBA pixel surface.
#[derive(Debug, Clone)]
pub struct Raster {
    img: RgbaImage,
}

impl Raster {
    /// Creates a transparent surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbaImage::new(width, height),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.img.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.img.height()
    }

    /// Fills the whole surface with one color.
    pub fn fill(&mut self, color: Rgba8) {
        let px = Rgba::from(color);
        for p in self.img.pixels_mut() {
            *p = px;
        }
    }

    /// Fills a rectangle, clipped to the surface.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba8) {
        let px = Rgba::from(color);
        let x1 = x.saturating_add(w).min(self.img.width());
        let y1 = y.saturating_add(h).min(self.img.height());
        for py in y..y1 {
            for px_x in x..x1 {
                self.img.put_pixel(px_x, py, px);
            }
        }
    }

    /// Reads one pixel; `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.img.get_pixel_checked(x, y).map(|&p| Rgba8::from(p))
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        self.img.as_raw()
    }

    /// Consumes the raster into an [`image::RgbaImage`].
    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    /// Writes the surface to disk; the format is inferred from the
    /// extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        self.img.save(path)
    }
}

/// Paints a Life grid onto a fresh surface sized `side x side` cells.
pub fn render_grid(grid: &GridAutomaton, style: &CellStyle) -> Raster {
    let side = grid.side() as u32;
    let cs = style.cell_size;
    let mut raster = Raster::new(side * cs, side * cs);
    raster.fill(style.background);

    let square = style.square();
    for y in 0..grid.side() {
        for x in 0..grid.side() {
            if grid.get(x, y) {
                raster.fill_rect(x as u32 * cs, y as u32 * cs, square, square, style.accent);
            }
        }
    }
    raster
}

/// Paints a row automaton's history onto a fresh surface.
///
/// The surface covers the full capacity (`cols x max_rows` cells) so it
/// keeps a stable size while the history grows; rows paint top-down.
pub fn render_rows(rows: &RowAutomaton, style: &CellStyle) -> Raster {
    let cs = style.cell_size;
    let width = rows.cols() as u32 * cs;
    let height = rows.max_rows() as u32 * cs;
    let mut raster = Raster::new(width, height);
    raster.fill(style.background);

    let square = style.square();
    for (r, row) in rows.rows().iter().enumerate() {
        for (c, &alive) in row.iter().enumerate() {
            if alive {
                raster.fill_rect(c as u32 * cs, r as u32 * cs, square, square, style.accent);
            }
        }
    }
    raster
}

/// Row capacity that fits a surface of the given height.
///
/// Zero cell size yields zero capacity, which the row automaton rejects at
/// construction.
pub fn rows_for_height(height_px: u32, cell_size: u32) -> usize {
    if cell_size == 0 {
        0
    } else {
        (height_px / cell_size) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_from_surface_height() {
        assert_eq!(rows_for_height(300, 5), 60);
        assert_eq!(rows_for_height(299, 5), 59);
        assert_eq!(rows_for_height(300, 0), 0);
    }

    #[test]
    fn fill_rect_clips_to_surface() {
        let mut raster = Raster::new(10, 10);
        raster.fill_rect(8, 8, 5, 5, Rgba8::ACCENT);

        assert_eq!(raster.pixel(9, 9), Some(Rgba8::ACCENT));
        assert_eq!(raster.pixel(7, 7), Some(Rgba8::TRANSPARENT));
        assert_eq!(raster.pixel(10, 10), None);
    }

    #[test]
    fn grid_cells_paint_with_a_gutter() {
        let mut grid = GridAutomaton::new(4).unwrap();
        grid.set(1, 1, true);

        let style = CellStyle::default();
        let raster = render_grid(&grid, &style);

        assert_eq!(raster.width(), 40);
        assert_eq!(raster.height(), 40);
        // Interior of the live cell
        assert_eq!(raster.pixel(10, 10), Some(style.accent));
        assert_eq!(raster.pixel(18, 18), Some(style.accent));
        // Gutter row/column of the same cell
        assert_eq!(raster.pixel(19, 19), Some(style.background));
        // A dead cell
        assert_eq!(raster.pixel(0, 0), Some(style.background));
    }

    #[test]
    fn row_history_paints_top_down() {
        let mut rows = RowAutomaton::new(8, 6, 90).unwrap();
        rows.step();

        let style = CellStyle::default();
        let raster = render_rows(&rows, &style);

        // Full capacity surface, independent of how many rows exist yet
        assert_eq!(raster.width(), 80);
        assert_eq!(raster.height(), 60);

        // Generation 0: single center cell at column 4
        assert_eq!(raster.pixel(41, 1), Some(style.accent));
        assert_eq!(raster.pixel(31, 1), Some(style.background));
        // Generation 1 under rule 90: cells at columns 3 and 5
        assert_eq!(raster.pixel(31, 11), Some(style.accent));
        assert_eq!(raster.pixel(51, 11), Some(style.accent));
        assert_eq!(raster.pixel(41, 11), Some(style.background));
    }

    #[test]
    fn single_pixel_cells_have_no_gutter() {
        let mut grid = GridAutomaton::new(3).unwrap();
        grid.set(0, 0, true);

        let style = CellStyle {
            cell_size: 1,
            ..CellStyle::default()
        };
        let raster = render_grid(&grid, &style);

        assert_eq!(raster.width(), 3);
        assert_eq!(raster.pixel(0, 0), Some(style.accent));
        assert_eq!(raster.pixel(1, 0), Some(style.background));
    }

    #[test]
    fn color_roundtrip_through_image() {
        let c = Rgba8::opaque(1, 2, 3);
        let img: image::Rgba<u8> = c.into();
        assert_eq!(Rgba8::from(img), c);
    }
}
