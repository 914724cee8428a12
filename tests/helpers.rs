use switch_helper::model::{
    center_origin, parse_hex_color, window_belongs_to_display, Point, Rect, RgbaColor, Size,
};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Hex colours ===

#[test]
fn to_hex_without_alpha_when_opaque() {
    let hex = RgbaColor::new(1.0, 0.0, 0.5, 1.0).to_hex();
    assert_eq!(hex, "#FF0080");
}

#[test]
fn to_hex_with_alpha_when_not_opaque() {
    let hex = RgbaColor::new(0.2, 0.4, 0.6, 0.5).to_hex();
    assert_eq!(hex, "#33669980");
}

#[test]
fn to_hex_clamps_input() {
    let hex = RgbaColor::new(-0.1, 1.2, 0.501, 1.0).to_hex();
    assert_eq!(hex, "#00FF80");
}

#[test]
fn parse_hex_rgb() {
    let c = parse_hex_color("#A50034").expect("valid rgb hex");
    assert!(approx_eq(c.r, 165.0 / 255.0));
    assert!(approx_eq(c.g, 0.0));
    assert!(approx_eq(c.b, 52.0 / 255.0));
    assert!(approx_eq(c.a, 1.0));
}

#[test]
fn parse_hex_rgba_without_hash() {
    let c = parse_hex_color("33669980").expect("valid rgba hex");
    assert!(approx_eq(c.r, 51.0 / 255.0));
    assert!(approx_eq(c.g, 102.0 / 255.0));
    assert!(approx_eq(c.b, 153.0 / 255.0));
    assert!(approx_eq(c.a, 128.0 / 255.0));
}

#[test]
fn parse_hex_trims_and_ignores_case() {
    let c = parse_hex_color("  ff00FF80  ").expect("valid with whitespace and mixed case");
    assert!(approx_eq(c.r, 1.0));
    assert!(approx_eq(c.b, 1.0));
    assert!(approx_eq(c.a, 128.0 / 255.0));
}

#[test]
fn parse_hex_invalid_lengths_return_none() {
    assert!(parse_hex_color("#FFF").is_none());
    assert!(parse_hex_color("#FF00").is_none());
    assert!(parse_hex_color("#FF00FF0000").is_none());
    assert!(parse_hex_color("").is_none());
}

#[test]
fn parse_hex_invalid_chars_return_none() {
    assert!(parse_hex_color("#GG0000").is_none());
    assert!(parse_hex_color("ZZZZZZZZ").is_none());
    assert!(parse_hex_color("#FF ÄÄ").is_none());
}

#[test]
fn parsed_colour_formats_back_to_same_hex() {
    let c = parse_hex_color("#112233CC").unwrap();
    assert_eq!(c.to_hex(), "#112233CC");
}

// === Geometry ===

#[test]
fn window_inside_display_belongs() {
    let display = Rect::new(0.0, 0.0, 1440.0, 900.0);
    assert!(window_belongs_to_display(
        &Rect::new(100.0, 100.0, 400.0, 300.0),
        &display
    ));
}

#[test]
fn window_on_other_display_does_not_belong() {
    let display = Rect::new(0.0, 0.0, 1440.0, 900.0);
    assert!(!window_belongs_to_display(
        &Rect::new(1500.0, 100.0, 400.0, 300.0),
        &display
    ));
}

#[test]
fn empty_window_belongs_nowhere() {
    let display = Rect::new(0.0, 0.0, 1440.0, 900.0);
    assert!(!window_belongs_to_display(
        &Rect::new(100.0, 100.0, 0.0, 0.0),
        &display
    ));
}

#[test]
fn window_centred_on_seam_belongs_to_right_display() {
    let left = Rect::new(0.0, 0.0, 1440.0, 900.0);
    let right = Rect::new(1440.0, 0.0, 1920.0, 1080.0);
    let window = Rect::new(1340.0, 0.0, 200.0, 200.0);
    assert!(!window_belongs_to_display(&window, &left));
    assert!(window_belongs_to_display(&window, &right));
}

#[test]
fn center_origin_centres_dialog_in_window() {
    let main = Rect::new(200.0, 100.0, 800.0, 600.0);
    let origin = center_origin(&main, &Size::new(400.0, 200.0));
    assert_eq!(origin, Point::new(400.0, 300.0));
}
