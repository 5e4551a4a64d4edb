// src/main.rs
//
// Batch thumbnail generator for the site's photo folders. Run it from a
// directory of images; it writes aspect-preserving JPEG thumbnails into a
// `thumbnails/` subdirectory and skips outputs that are already newer than
// their source. One bad file never stops the batch.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

/// The larger output dimension never exceeds this.
const MAX_DIMENSION: u32 = 300;
const JPEG_QUALITY: u8 = 85;
const OUTPUT_DIR: &str = "thumbnails";
const OUTPUT_PREFIX: &str = "thumb_";
const SOURCE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "bmp"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct BatchSummary {
    written: usize,
    skipped: usize,
    failed: usize,
}

/// Thumbnail dimensions for a source image: uniformly scaled so the larger
/// side lands on `max`, preserving aspect ratio. Images already within the
/// bound keep their size; nothing is ever upscaled.
fn fit_dimensions(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }
    if width >= height {
        let scaled = (height as f64 * max as f64 / width as f64).round() as u32;
        (max, scaled.max(1))
    } else {
        let scaled = (width as f64 * max as f64 / height as f64).round() as u32;
        (scaled.max(1), max)
    }
}

fn is_source_image(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SOURCE_EXTENSIONS.iter().any(|known| *known == ext)
        })
        .unwrap_or(false)
}

/// An output counts as up to date when its mtime is at least the source's;
/// the equal case matters on filesystems with coarse timestamps, where a
/// thumbnail written in the same second as its source must not be redone.
fn is_up_to_date(source: &Path, output: &Path) -> bool {
    let source_modified = fs::metadata(source).and_then(|m| m.modified());
    let output_modified = fs::metadata(output).and_then(|m| m.modified());
    match (source_modified, output_modified) {
        (Ok(source), Ok(output)) => output >= source,
        _ => false,
    }
}

fn write_thumbnail(source: &Path, output: &Path) -> Result<(u32, u32)> {
    let img = image::open(source)
        .with_context(|| format!("cannot decode {}", source.display()))?;
    let (width, height) = img.dimensions();
    let (target_w, target_h) = fit_dimensions(width, height, MAX_DIMENSION);

    let resized = if (target_w, target_h) == (width, height) {
        img
    } else {
        img.resize_exact(target_w, target_h, FilterType::Lanczos3)
    };
    // JPEG has no alpha channel; flatten whatever the source carried.
    let flattened = DynamicImage::ImageRgb8(resized.to_rgb8());

    let file = fs::File::create(output)
        .with_context(|| format!("cannot create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    flattened
        .write_with_encoder(encoder)
        .with_context(|| format!("cannot encode {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("cannot write {}", output.display()))?;

    Ok((target_w, target_h))
}

fn run_batch(dir: &Path) -> Result<BatchSummary> {
    let output_dir = dir.join(OUTPUT_DIR);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("cannot create {}", output_dir.display()))?;

    let mut sources: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("cannot read {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_source_image(path))
        .collect();
    sources.sort();

    let mut summary = BatchSummary::default();
    for source in sources {
        let Some(stem) = source.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let output = output_dir.join(format!("{}{}.jpg", OUTPUT_PREFIX, stem));

        if is_up_to_date(&source, &output) {
            log::info!("{}: thumbnail up to date, skipping", source.display());
            summary.skipped += 1;
            continue;
        }
        match write_thumbnail(&source, &output) {
            Ok((w, h)) => {
                log::info!("{}: wrote {} ({}x{})", source.display(), output.display(), w, h);
                summary.written += 1;
            }
            Err(err) => {
                log::error!("{}: {:#}", source.display(), err);
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}

fn main() -> Result<()> {
    let _logger = flexi_logger::Logger::try_with_env_or_str("info")?.start()?;

    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let summary = run_batch(&cwd)?;
    log::info!(
        "done: {} thumbnails written, {} up to date, {} failed",
        summary.written,
        summary.skipped,
        summary.failed
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;
    use tempfile::TempDir;

    fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let img = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, 120])
        });
        let path = dir.join(name);
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn fit_dimensions_scales_the_larger_side_to_max() {
        assert_eq!(fit_dimensions(1200, 800, 300), (300, 200));
        assert_eq!(fit_dimensions(800, 1200, 300), (200, 300));
        assert_eq!(fit_dimensions(1000, 1000, 300), (300, 300));
    }

    #[test]
    fn fit_dimensions_never_upscales() {
        assert_eq!(fit_dimensions(200, 100, 300), (200, 100));
        assert_eq!(fit_dimensions(300, 300, 300), (300, 300));
    }

    #[test]
    fn fit_dimensions_keeps_thin_images_at_least_one_pixel() {
        assert_eq!(fit_dimensions(10_000, 10, 300), (300, 1));
    }

    #[test]
    fn batch_produces_aspect_preserving_jpeg() {
        let dir = TempDir::new().unwrap();
        write_test_image(dir.path(), "race.png", 1200, 800);

        let summary = run_batch(dir.path()).unwrap();
        assert_eq!(summary.written, 1);
        assert_eq!(summary.failed, 0);

        let thumb = dir.path().join(OUTPUT_DIR).join("thumb_race.jpg");
        let produced = image::open(&thumb).unwrap();
        assert_eq!(produced.dimensions(), (300, 200));
    }

    #[test]
    fn second_run_skips_up_to_date_outputs() {
        let dir = TempDir::new().unwrap();
        write_test_image(dir.path(), "podium.jpg", 900, 600);

        let first = run_batch(dir.path()).unwrap();
        assert_eq!(first.written, 1);

        let second = run_batch(dir.path()).unwrap();
        assert_eq!(second.written, 0);
        assert_eq!(second.skipped, 1);
    }

    #[test]
    fn broken_file_is_reported_but_does_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("broken.jpg"), b"not an image").unwrap();
        write_test_image(dir.path(), "finish.png", 640, 480);

        let summary = run_batch(dir.path()).unwrap();
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.written, 1);
    }

    #[test]
    fn non_image_files_are_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.txt"), b"pace plan").unwrap();
        write_test_image(dir.path(), "small.png", 120, 80);

        let summary = run_batch(dir.path()).unwrap();
        assert_eq!(summary.written, 1);
        assert_eq!(summary.skipped, 0);
        assert_eq!(summary.failed, 0);

        // A source already inside the bound is re-encoded at its own size.
        let thumb = dir.path().join(OUTPUT_DIR).join("thumb_small.jpg");
        assert_eq!(image::open(thumb).unwrap().dimensions(), (120, 80));
    }
}
