use crate::density::DensityGrid;

/// One fixed smoothing pass over the grid: separable [1, 2, 1]/4 applied
/// horizontally then vertically, which composes to the classic 3×3
/// approximate-Gaussian kernel. Clamp-to-edge sampling; a constant grid is
/// a fixed point, so untouched regions stay exactly white.
pub fn blur(grid: &mut DensityGrid) {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    if w == 0 || h == 0 {
        return;
    }

    let mut tmp = vec![0u8; (w as usize) * (h as usize)];
    horizontal_pass(grid.cells(), &mut tmp, w, h);
    vertical_pass(&tmp, grid.cells_mut(), w, h);
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], w: i32, h: i32) {
    for y in 0..h {
        let row = (y * w) as usize;
        for x in 0..w {
            let sample = |sx: i32| u32::from(src[row + sx.clamp(0, w - 1) as usize]);
            let acc = sample(x - 1) + 2 * sample(x) + sample(x + 1);
            dst[row + x as usize] = ((acc + 2) / 4) as u8;
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], w: i32, h: i32) {
    for y in 0..h {
        for x in 0..w {
            let sample = |sy: i32| u32::from(src[(sy.clamp(0, h - 1) * w + x) as usize]);
            let acc = sample(y - 1) + 2 * sample(y) + sample(y + 1);
            dst[(y * w + x) as usize] = ((acc + 2) / 4) as u8;
        }
    }
}
