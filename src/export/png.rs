use super::ExportError;
use crate::draw::{Canvas, Color, CommandLog, fill_background};

/// Renders the committed commands at `scale`x resolution and encodes them as PNG.
///
/// The output is `(width * scale) x (height * scale)` pixels. Every command is
/// replayed under a uniform scale transform, so stroke widths, sticker sizes
/// and positions grow with the image. The log is only read.
pub fn export_png(
    log: &CommandLog,
    width: i32,
    height: i32,
    scale: u32,
    background: Option<Color>,
) -> Result<Vec<u8>, ExportError> {
    if scale == 0 {
        return Err(ExportError::InvalidScale(scale));
    }
    let too_large = || ExportError::TooLarge {
        width,
        height,
        scale,
    };
    let factor = i32::try_from(scale).map_err(|_| too_large())?;
    let out_width = width.checked_mul(factor).ok_or_else(too_large)?;
    let out_height = height.checked_mul(factor).ok_or_else(too_large)?;

    let canvas = Canvas::new(out_width, out_height)?;
    {
        let ctx = canvas.context()?;
        if let Some(background) = background {
            fill_background(&ctx, background);
        }
        ctx.scale(scale as f64, scale as f64);
        log.render_all(&ctx);
    }

    let bytes = canvas.to_png()?;
    log::info!(
        "Exported {} commands at {}x{} ({} bytes)",
        log.len(),
        out_width,
        out_height,
        bytes.len()
    );
    Ok(bytes)
}
