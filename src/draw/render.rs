//! Cairo-based rendering functions for commands and glyphs.

use super::color::Color;
use super::command::{Command, Sticker, Stroke};
use super::font::FontDescriptor;
use super::point::Point;

/// Renders all commands in order (first command = bottom layer).
pub fn render_commands(ctx: &cairo::Context, commands: &[Command]) {
    for command in commands {
        command.render(ctx);
    }
}

/// Renders a freehand stroke as one straight segment per consecutive point pair.
///
/// Source color and line width are set for every segment so that nothing
/// rendered earlier on the same context can influence the result.
pub fn render_stroke(ctx: &cairo::Context, stroke: &Stroke) {
    render_polyline(ctx, &stroke.points, stroke.color, stroke.width);
}

/// Render a polyline segment by segment. Fewer than two points draws nothing.
pub fn render_polyline(ctx: &cairo::Context, points: &[Point], color: Color, width: f64) {
    for pair in points.windows(2) {
        color.apply(ctx);
        ctx.set_line_width(width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        ctx.move_to(pair[0].x, pair[0].y);
        ctx.line_to(pair[1].x, pair[1].y);
        let _ = ctx.stroke();
    }
}

/// Renders a sticker glyph in black, centered on its anchor and rotated about it.
///
/// The context transform is saved before and restored after drawing.
pub fn render_sticker(ctx: &cairo::Context, sticker: &Sticker) {
    if sticker.glyph.is_empty() || sticker.size <= 0.0 {
        return;
    }

    ctx.save().ok();
    ctx.translate(sticker.location.x, sticker.location.y);
    ctx.rotate(sticker.angle.to_radians());
    draw_glyph_centered_at_origin(
        ctx,
        &sticker.glyph,
        sticker.size,
        &FontDescriptor::default(),
        Color::default(),
    );
    ctx.restore().ok();
}

/// Draws `glyph` with its horizontal center on `anchor.x` and its ink box
/// vertically centered on `anchor.y`. Returns the measured advance width.
pub fn render_centered_glyph(
    ctx: &cairo::Context,
    glyph: &str,
    anchor: Point,
    size: f64,
    font: &FontDescriptor,
    color: Color,
) -> Option<f64> {
    if glyph.is_empty() || size <= 0.0 {
        return None;
    }

    ctx.save().ok();
    ctx.translate(anchor.x, anchor.y);
    let width = draw_glyph_centered_at_origin(ctx, glyph, size, font, color);
    ctx.restore().ok();
    width
}

/// Lays out `glyph` and draws it so its center lands on the current origin.
fn draw_glyph_centered_at_origin(
    ctx: &cairo::Context,
    glyph: &str,
    size: f64,
    font: &FontDescriptor,
    color: Color,
) -> Option<f64> {
    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(glyph);

    let (ink_rect, logical_rect) = layout.pixel_extents();
    let advance = logical_rect.width() as f64;
    if advance <= 0.0 {
        return None;
    }

    let ink_center_y = ink_rect.y() as f64 + ink_rect.height() as f64 / 2.0;
    let offset_x = logical_rect.x() as f64 + advance / 2.0;

    color.apply(ctx);
    ctx.move_to(-offset_x, -ink_center_y);
    pangocairo::functions::show_layout(ctx, &layout);
    ctx.new_path();

    Some(advance)
}

/// Resets every pixel of the surface behind `ctx` to fully transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}

/// Fills the whole surface with an opaque background color.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    ctx.save().ok();
    color.apply(ctx);
    let _ = ctx.paint();
    ctx.restore().ok();
}
