use boopadoop::draw::color::{BLACK, BLUE, RED};
use boopadoop::draw::{Canvas, CommandLog, Point, Sticker};
use boopadoop::export::export_png;

fn render_log(log: &CommandLog, width: i32, height: i32) -> Vec<u8> {
    let mut canvas = Canvas::new(width, height).unwrap();
    {
        let ctx = canvas.context().unwrap();
        log.render_all(&ctx);
    }
    canvas.pixels().unwrap()
}

fn decode_png(bytes: &[u8]) -> cairo::ImageSurface {
    let mut reader = std::io::Cursor::new(bytes);
    cairo::ImageSurface::create_from_png(&mut reader).unwrap()
}

fn alpha_at(surface: &mut cairo::ImageSurface, x: i32, y: i32) -> u8 {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (word >> 24) as u8
}

fn sample_log() -> CommandLog {
    let mut log = CommandLog::new();
    log.begin_stroke(Point::new(10.0, 10.0), 3.0, RED);
    log.extend_active_stroke(Point::new(60.0, 40.0));
    log.extend_active_stroke(Point::new(100.0, 20.0));
    log.commit_sticker(Sticker::new(Point::new(64.0, 64.0), "✨", 32.0, 30.0));
    log.begin_stroke(Point::new(5.0, 120.0), 8.0, BLUE);
    log.extend_active_stroke(Point::new(120.0, 120.0));
    log
}

#[test]
fn render_all_is_deterministic() {
    let log = sample_log();
    assert_eq!(render_log(&log, 128, 128), render_log(&log, 128, 128));
}

#[test]
fn undo_then_redo_restores_pixels() {
    let mut log = sample_log();
    let before = render_log(&log, 128, 128);

    assert!(log.undo());
    assert!(log.undo());
    assert_ne!(render_log(&log, 128, 128), before);
    assert!(log.redo());
    assert!(log.redo());
    assert_eq!(render_log(&log, 128, 128), before);
}

#[test]
fn export_scales_geometry() {
    let mut log = CommandLog::new();
    log.begin_stroke(Point::new(10.0, 10.0), 2.0, BLACK);
    log.extend_active_stroke(Point::new(100.0, 10.0));

    let bytes = export_png(&log, 256, 256, 4, None).unwrap();
    let mut surface = decode_png(&bytes);
    assert_eq!((surface.width(), surface.height()), (1024, 1024));

    // Endpoints land at 4x their canvas coordinates; width grows to 8px.
    let start = Point::new(10.0, 10.0).scaled(4.0);
    let end = Point::new(100.0, 10.0).scaled(4.0);
    assert_eq!(alpha_at(&mut surface, start.x as i32, start.y as i32), 255);
    assert_eq!(alpha_at(&mut surface, end.x as i32, end.y as i32), 255);
    assert_eq!(alpha_at(&mut surface, 200, 43), 255);
    assert_eq!(alpha_at(&mut surface, 200, 52), 0);
    assert_eq!(alpha_at(&mut surface, 500, 40), 0);
}

#[test]
fn export_leaves_log_untouched() {
    let log = sample_log();
    let generation = log.generation();
    let before = render_log(&log, 128, 128);

    export_png(&log, 128, 128, 2, None).unwrap();
    assert_eq!(log.generation(), generation);
    assert_eq!(render_log(&log, 128, 128), before);
}

#[test]
fn width_change_affects_only_later_strokes() {
    let mut log = CommandLog::new();
    log.begin_stroke(Point::new(10.0, 20.0), 2.0, BLACK);
    log.extend_active_stroke(Point::new(110.0, 20.0));
    log.begin_stroke(Point::new(10.0, 80.0), 12.0, BLACK);
    log.extend_active_stroke(Point::new(110.0, 80.0));

    let bytes = export_png(&log, 128, 128, 1, None).unwrap();
    let mut surface = decode_png(&bytes);

    // Thin stroke: covered at its center row, clear four pixels away.
    assert_eq!(alpha_at(&mut surface, 60, 20), 255);
    assert_eq!(alpha_at(&mut surface, 60, 24), 0);
    // Thick stroke: still covered four pixels from its center.
    assert_eq!(alpha_at(&mut surface, 60, 84), 255);
}

#[test]
fn clear_renders_empty() {
    let mut log = sample_log();
    log.clear();
    assert!(render_log(&log, 64, 64).iter().all(|b| *b == 0));
    assert!(!log.can_redo());
}
