use std::path::Path;

use anyhow::Context as _;
use image::RgbaImage;

use crate::{
    color::{ALPHA_TRANSPARENT, Rgb, Rgba},
    error::{HeatfieldError, HeatfieldResult},
};

pub const TABLE_LEN: usize = 256;

/// Index ranges of the four interpolation segments; segment `i` blends
/// keyframe `i` into keyframe `i + 1`.
const SEGMENTS: [(usize, usize); 4] = [(0, 128), (128, 192), (192, 240), (240, 256)];

/// 256-entry intensity-to-colour lookup table. Index 0 is the least dense
/// end of the gradient, 255 the most dense. Immutable once built or loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientTable {
    entries: [Rgba; TABLE_LEN],
}

impl GradientTable {
    /// Interpolate the five keyframes across the four fixed segments.
    ///
    /// Colour channels blend linearly within each segment; transparency
    /// falls off linearly over the whole table regardless of segment, so
    /// the dense end is the most opaque.
    pub fn build(keyframes: &[Rgb; 5]) -> Self {
        let mut entries = [Rgba {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
        }; TABLE_LEN];

        for (segment, &(start, end)) in SEGMENTS.iter().enumerate() {
            let from = keyframes[segment];
            let to = keyframes[segment + 1];
            let steps = (end - start) as f32;

            for step in 0..(end - start) {
                let t = step as f32 / steps;
                let index = start + step;
                entries[index] = Rgba {
                    red: lerp_channel(from.red, to.red, t),
                    green: lerp_channel(from.green, to.green, t),
                    blue: lerp_channel(from.blue, to.blue, t),
                    alpha: (f32::from(ALPHA_TRANSPARENT)
                        - (index as f32 / 255.0 * f32::from(ALPHA_TRANSPARENT)))
                        as u8,
                };
            }
        }

        Self { entries }
    }

    /// Load the cache at `cache_path` if present, otherwise build and
    /// persist it.
    ///
    /// A present cache is loaded verbatim with no check that it matches
    /// `keyframes`; callers varying the palette must vary the cache path.
    /// A present but undecodable cache is discarded and rebuilt.
    pub fn build_or_load(keyframes: &[Rgb; 5], cache_path: &Path) -> HeatfieldResult<Self> {
        if cache_path.exists() {
            match Self::load(cache_path) {
                Ok(table) => return Ok(table),
                Err(err) => {
                    tracing::warn!(
                        path = %cache_path.display(),
                        %err,
                        "discarding unreadable gradient cache"
                    );
                }
            }
        }

        tracing::debug!(path = %cache_path.display(), "building gradient table");
        let table = Self::build(keyframes);
        table.store(cache_path)?;
        Ok(table)
    }

    /// Load a previously persisted table. The file must be a 256×1 image.
    pub fn load(path: &Path) -> HeatfieldResult<Self> {
        let img = image::open(path)
            .map_err(|err| {
                HeatfieldError::cache_read_failed(format!("{}: {err}", path.display()))
            })?
            .to_rgba8();

        if img.width() as usize != TABLE_LEN || img.height() != 1 {
            return Err(HeatfieldError::cache_read_failed(format!(
                "{}: expected a 256x1 table, got {}x{}",
                path.display(),
                img.width(),
                img.height()
            )));
        }

        let mut entries = [Rgba {
            red: 0,
            green: 0,
            blue: 0,
            alpha: 0,
        }; TABLE_LEN];
        for (entry, px) in entries.iter_mut().zip(img.pixels()) {
            *entry = Rgba {
                red: px[0],
                green: px[1],
                blue: px[2],
                alpha: px[3].min(ALPHA_TRANSPARENT),
            };
        }
        Ok(Self { entries })
    }

    /// Persist as a 256×1 PNG. The half-range alpha byte is stored verbatim
    /// in the PNG alpha channel, so the round-trip is lossless.
    pub fn store(&self, path: &Path) -> HeatfieldResult<()> {
        let mut img = RgbaImage::new(TABLE_LEN as u32, 1);
        for (px, entry) in img.pixels_mut().zip(&self.entries) {
            *px = image::Rgba([entry.red, entry.green, entry.blue, entry.alpha]);
        }
        img.save(path)
            .with_context(|| format!("persist gradient cache '{}'", path.display()))?;
        Ok(())
    }

    pub fn get(&self, level: u8) -> Rgba {
        self.entries[usize::from(level)]
    }

    pub fn entries(&self) -> &[Rgba; TABLE_LEN] {
        &self.entries
    }
}

fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    // Truncation, not rounding, to match the original tables.
    (f32::from(to) * t + f32::from(from) * (1.0 - t)) as u8
}
