use image::RgbaImage;

use crate::{
    color::{ALPHA_TRANSPARENT, Rgba},
    density::DensityGrid,
    gradient::GradientTable,
};

/// Heatmap colours are drawn slightly more transparent than the raw table
/// keeps them, so the background stays visible under hotspots.
const HEAT_OPACITY_SCALE: f32 = 0.9;

/// Map every accumulated cell through the gradient table and paint it onto
/// the output. Cells still at exact white are background and stay
/// untouched; for the rest, residual lightness inverts into the intensity
/// level used as the table index.
pub fn composite(out: &mut RgbaImage, grid: &DensityGrid, table: &GradientTable) {
    debug_assert_eq!(out.dimensions(), (grid.width(), grid.height()));

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let cell = grid.get(x, y);
            if cell == u8::MAX {
                continue;
            }

            let level = u8::MAX - cell;
            let colour = table.get(level);
            let faded = Rgba {
                alpha: (f32::from(colour.alpha) * HEAT_OPACITY_SCALE) as u8,
                ..colour
            };

            let px = out.get_pixel_mut(x, y);
            *px = over(*px, faded);
        }
    }
}

/// Blend `src` (half-range alpha, 0 = opaque) over a full-range-alpha
/// destination pixel. Colour channels mix by the source's opacity weight;
/// the destination can only become more opaque.
fn over(dst: image::Rgba<u8>, src: Rgba) -> image::Rgba<u8> {
    let transparency = u32::from(src.alpha.min(ALPHA_TRANSPARENT));
    let opacity = 127 - transparency;

    let blend =
        |s: u8, d: u8| ((u32::from(s) * opacity + u32::from(d) * transparency) / 127) as u8;

    let out_alpha = 255 - ((255 - u32::from(dst[3])) * transparency / 127) as u8;

    image::Rgba([
        blend(src.red, dst[0]),
        blend(src.green, dst[1]),
        blend(src.blue, dst[2]),
        out_alpha,
    ])
}
