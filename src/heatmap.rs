use std::{fs::File, io::BufWriter, path::Path};

use image::{
    ImageEncoder, RgbaImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::{
    blur::blur,
    composite::composite,
    config::HeatmapConfig,
    density::{DensityGrid, Point},
    error::{HeatfieldError, HeatfieldResult},
    gradient::GradientTable,
};

/// The render engine. Collects points against a fixed config, then turns
/// them into a heatmap image in one synchronous pass.
///
/// ```no_run
/// use heatfield::{Heatmap, HeatmapConfig};
///
/// let mut heatmap = Heatmap::new(HeatmapConfig::default())?;
/// heatmap.add_point(40, 40);
/// heatmap.add_point(42, 40);
/// heatmap.save("out.png")?;
/// # Ok::<(), heatfield::HeatfieldError>(())
/// ```
pub struct Heatmap {
    config: HeatmapConfig,
    points: Vec<Point>,
}

impl Heatmap {
    pub fn new(config: HeatmapConfig) -> HeatfieldResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            points: Vec::new(),
        })
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    pub fn add_point(&mut self, x: i32, y: i32) {
        self.points.push(Point { x, y });
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Run the full pipeline: canvas → gradient → accumulate → blur →
    /// composite. Buffers live only for the duration of this call.
    #[tracing::instrument(skip(self), fields(points = self.points.len()))]
    pub fn render(&self) -> HeatfieldResult<RgbaImage> {
        let keyframes = self.config.keyframes()?;
        let mut output = self.output_canvas()?;
        let (width, height) = output.dimensions();

        let table = GradientTable::build_or_load(&keyframes, &self.config.gradient_cache_path())?;

        let mut grid = DensityGrid::new(width, height);
        grid.accumulate(&self.points, self.config.radius);
        blur(&mut grid);
        composite(&mut output, &grid, &table);

        Ok(output)
    }

    /// Render and serialize to `path` as PNG at the configured compression
    /// level.
    pub fn save(&self, path: impl AsRef<Path>) -> HeatfieldResult<()> {
        let image = self.render()?;
        let path = path.as_ref();

        let file = File::create(path)
            .map_err(|err| HeatfieldError::write_failed(format!("{}: {err}", path.display())))?;
        let encoder = PngEncoder::new_with_quality(
            BufWriter::new(file),
            compression_for(self.config.quality),
            FilterType::Adaptive,
        );
        encoder
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|err| HeatfieldError::write_failed(format!("{}: {err}", path.display())))?;
        Ok(())
    }

    /// Decode the background if configured (its dimensions win over the
    /// configured canvas size), otherwise start from solid white.
    fn output_canvas(&self) -> HeatfieldResult<RgbaImage> {
        match &self.config.background_img {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|err| {
                    HeatfieldError::background_not_found(format!("{}: {err}", path.display()))
                })?;
                let decoded = image::load_from_memory(&bytes).map_err(|err| {
                    HeatfieldError::background_not_found(format!("{}: {err}", path.display()))
                })?;
                Ok(decoded.to_rgba8())
            }
            None => Ok(RgbaImage::from_pixel(
                self.config.width,
                self.config.height,
                image::Rgba([255, 255, 255, 255]),
            )),
        }
    }
}

/// Map the zlib-style 0..=9 level onto the encoder's compression presets.
fn compression_for(quality: u8) -> CompressionType {
    match quality {
        0..=2 => CompressionType::Fast,
        3..=6 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}
