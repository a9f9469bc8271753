//! PNG export with the view embedded as tEXt chunks.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tracing::debug;

use orbitbrot_core::Viewport;

const SOFTWARE: &str = "orbitbrot";

/// Write an RGBA frame of `viewport`'s size as a PNG file.
///
/// The center, zoom and resolution are stored as tEXt chunks so the image
/// can be traced back to the view that produced it.
pub fn export_png(pixels: &[u8], viewport: &Viewport, path: &Path) -> crate::Result<()> {
    let writer = BufWriter::new(File::create(path)?);

    let mut encoder = png::Encoder::new(writer, viewport.width, viewport.height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), SOFTWARE.to_string())?;
    encoder.add_text_chunk("Description".to_string(), describe(viewport))?;
    for (key, value) in metadata_pairs(viewport) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(pixels)?;

    debug!(
        "Exported PNG {}x{} to {}",
        viewport.width,
        viewport.height,
        path.display()
    );
    Ok(())
}

fn describe(viewport: &Viewport) -> String {
    format!(
        "Mandelbrot - Center: {}, Zoom: {}",
        viewport.center, viewport.zoom
    )
}

fn metadata_pairs(viewport: &Viewport) -> Vec<(String, String)> {
    vec![
        ("orbitbrot.CenterX".into(), viewport.center.re.to_string()),
        ("orbitbrot.CenterY".into(), viewport.center.im.to_string()),
        ("orbitbrot.Zoom".into(), viewport.zoom.to_string()),
        (
            "orbitbrot.Resolution".into(),
            format!("{}x{}", viewport.width, viewport.height),
        ),
    ]
}
