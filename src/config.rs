use std::path::PathBuf;

use crate::{
    color::{self, Rgb, hex_to_rgb},
    error::{HeatfieldError, HeatfieldResult},
};

/// All knobs for one render. Fixed for the lifetime of a [`crate::Heatmap`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HeatmapConfig {
    /// Canvas width in pixels; overridden by the background image when set.
    pub width: u32,
    /// Canvas height in pixels; overridden by the background image when set.
    pub height: u32,
    /// Optional background image path. Its natural dimensions win.
    pub background_img: Option<PathBuf>,
    /// Point mark radius in pixels.
    pub radius: u32,
    /// Directory holding the gradient cache file.
    pub cache_dir: PathBuf,
    /// File name of the gradient cache under `cache_dir`.
    pub gradient_file: String,
    /// Exactly five 6-digit hex colours, low intensity to high.
    pub gradient_colours: Vec<String>,
    /// PNG compression level, zlib-style: 0 = fastest/largest.
    pub quality: u8,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            background_img: None,
            radius: 15,
            cache_dir: std::env::temp_dir(),
            gradient_file: "gradient.png".to_string(),
            gradient_colours: [
                color::BLUE,
                color::GREEN,
                color::YELLOW,
                color::RED,
                color::WHITE,
            ]
            .map(str::to_string)
            .to_vec(),
            quality: 0,
        }
    }
}

impl HeatmapConfig {
    pub fn validate(&self) -> HeatfieldResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(HeatfieldError::invalid_config(
                "width/height must be non-zero",
            ));
        }
        if self.radius == 0 {
            return Err(HeatfieldError::invalid_config("radius must be non-zero"));
        }
        self.keyframes().map(|_| ())
    }

    /// Resolve the configured hex colours into the five gradient keyframes.
    pub fn keyframes(&self) -> HeatfieldResult<[Rgb; 5]> {
        if self.gradient_colours.len() != 5 {
            return Err(HeatfieldError::invalid_config(format!(
                "gradient needs exactly 5 keyframe colours, got {}",
                self.gradient_colours.len()
            )));
        }

        let mut keyframes = [Rgb {
            red: 0,
            green: 0,
            blue: 0,
        }; 5];
        for (slot, hex) in keyframes.iter_mut().zip(&self.gradient_colours) {
            *slot = hex_to_rgb(hex)?;
        }
        Ok(keyframes)
    }

    pub fn gradient_cache_path(&self) -> PathBuf {
        self.cache_dir.join(&self.gradient_file)
    }
}
