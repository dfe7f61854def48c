/// Transparency of one stamped circle: 92% of fully transparent, so a
/// single stamp barely darkens the grid and hotspots emerge from stacking.
pub const STAMP_ALPHA: u8 = (127.0 * 0.92) as u8;

/// A 2D point observation. May lie outside the canvas; clipped at
/// rasterization time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Single-channel accumulation grid. Cells start at 255 (untouched white)
/// and darken toward 0 as density accumulates.
#[derive(Clone, Debug)]
pub struct DensityGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl DensityGrid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![u8::MAX; (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.cells[(y as usize) * (self.width as usize) + (x as usize)]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Rasterize every point as a stack of concentric faint circles, radius
    /// descending to 1. Cells covered by several circles (near the centre,
    /// or under overlapping points) compound toward opaque black.
    pub fn accumulate(&mut self, points: &[Point], radius: u32) {
        let radius = radius.min(i32::MAX as u32) as i32;
        for point in points {
            for r in (1..=radius).rev() {
                self.stamp_circle(point.x, point.y, r);
            }
        }
    }

    fn stamp_circle(&mut self, cx: i32, cy: i32, r: i32) {
        let rr = r * r;
        for dy in -r..=r {
            let Some(y) = clip(cy.checked_add(dy), self.height) else {
                continue;
            };
            for dx in -r..=r {
                if dx * dx + dy * dy > rr {
                    continue;
                }
                let Some(x) = clip(cx.checked_add(dx), self.width) else {
                    continue;
                };
                let index = y * (self.width as usize) + x;
                self.cells[index] = blend_black(self.cells[index]);
            }
        }
    }
}

fn clip(coord: Option<i32>, limit: u32) -> Option<usize> {
    match coord {
        Some(c) if c >= 0 && (c as u32) < limit => Some(c as usize),
        _ => None,
    }
}

/// One half-range alpha blend of black at [`STAMP_ALPHA`] over `cell`:
/// the cell keeps `STAMP_ALPHA / 127` of its lightness.
fn blend_black(cell: u8) -> u8 {
    ((u16::from(cell) * u16::from(STAMP_ALPHA)) / 127) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_grid_is_all_white() {
        let grid = DensityGrid::new(4, 3);
        assert!(grid.cells().iter().all(|&c| c == 255));
    }

    #[test]
    fn repeated_point_darkens_then_plateaus() {
        let darkness_after = |n: usize| {
            let mut grid = DensityGrid::new(11, 11);
            grid.accumulate(&vec![Point { x: 5, y: 5 }; n], 2);
            grid.get(5, 5)
        };

        assert!(darkness_after(10) < darkness_after(1));
        // Saturation: repeated blends bottom out near opaque black.
        assert!(darkness_after(50).abs_diff(darkness_after(100)) <= 1);
    }

    #[test]
    fn single_point_is_local_to_its_radius() {
        let mut grid = DensityGrid::new(21, 21);
        grid.accumulate(&[Point { x: 10, y: 10 }], 3);

        assert!(grid.get(10, 10) < 255);
        // Centre saw every concentric circle; the rim saw fewer.
        assert!(grid.get(10, 10) < grid.get(13, 10));
        // Outside the radius nothing was touched.
        assert_eq!(grid.get(14, 10), 255);
        assert_eq!(grid.get(0, 0), 255);
    }

    #[test]
    fn out_of_canvas_points_are_clipped() {
        let mut grid = DensityGrid::new(8, 8);
        grid.accumulate(
            &[
                Point { x: -50, y: -50 },
                Point { x: 1000, y: 3 },
                Point { x: i32::MIN, y: i32::MAX },
            ],
            15,
        );
        assert!(grid.cells().iter().all(|&c| c == 255));
    }

    #[test]
    fn point_on_the_edge_darkens_the_corner() {
        let mut grid = DensityGrid::new(8, 8);
        grid.accumulate(&[Point { x: 0, y: 0 }], 4);
        assert!(grid.get(0, 0) < 255);
    }
}
