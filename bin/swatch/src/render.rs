//! Presentation of the current color: truecolor terminal output and PNG
//! swatches.

use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use image::{Rgba, RgbaImage};
use imageproc::rect::Rect;
use rand::Rng;
use randhue::{config, Clipboard, Color, Driver, Representation, Tone};
use rusttype::{point, Font, Scale};

const WIDTH: u32 = 680;
const HEIGHT: u32 = 360;
const SWATCH_SIZE: u32 = 280;
const MARGIN: u32 = 40;

/// Base background the washes are blended over, `#0F1117`.
const BACKGROUND: Color = Color::new(0x0f, 0x11, 0x17);

/// A block of terminal cells filled with `color`.
pub fn ansi_block(color: &Color, width: usize) -> String {
    format!(
        "\x1b[48;2;{};{};{}m{}\x1b[0m",
        color.red,
        color.green,
        color.blue,
        " ".repeat(width)
    )
}

/// Print the swatch and the three representations of `color`.
pub fn print_color(color: &Color) {
    let block = ansi_block(color, 12);
    println!();
    println!("  {block}  {}", color.to_hex());
    println!("  {block}  {}", color.to_rgb_string());
    println!("  {block}  {}", color.to_hsl_string());
}

/// Print the copy controls with their transient labels.
pub fn print_controls<C: Clipboard, R: Rng>(driver: &Driver<C, R>, now: Instant) {
    for representation in Representation::ALL {
        println!(
            "  {:<4} {:<16} [{}]",
            representation.label(),
            driver.text(representation),
            driver.copy_label(representation, now)
        );
    }
}

/// Blend `color` over `base` with `alpha` in gamma space.
fn wash(base: &Color, color: &Color, alpha: u8) -> Rgba<u8> {
    let a = f32::from(alpha) / 255.0;
    let mix = |b: u8, c: u8| (f32::from(b) * (1.0 - a) + f32::from(c) * a).round() as u8;
    Rgba([
        mix(base.red, color.red),
        mix(base.green, color.green),
        mix(base.blue, color.blue),
        255,
    ])
}

fn rgba(color: &Color) -> Rgba<u8> {
    Rgba([color.red, color.green, color.blue, 255])
}

/// Load a TrueType font from `path`.
pub fn load_font(path: &Path) -> anyhow::Result<Font<'static>> {
    let data = std::fs::read(path).with_context(|| format!("could not read {}", path.display()))?;
    Font::try_from_vec(data).with_context(|| format!("{} is not a valid font", path.display()))
}

/// Render a swatch of `color` to a PNG at `path`. The three representations
/// are drawn next to the swatch when a font is given.
pub fn write_png(path: &Path, color: &Color, font: Option<&Font>) -> anyhow::Result<()> {
    let mut img = RgbaImage::new(WIDTH, HEIGHT);

    let strong = wash(&BACKGROUND, color, config::WASH_ALPHA_STRONG);
    let faint = wash(&BACKGROUND, color, config::WASH_ALPHA_FAINT);
    img.enumerate_rows_mut().for_each(|(_, pixels)| {
        for (x, _, pixel) in pixels {
            *pixel = if x < WIDTH / 2 { strong } else { faint };
        }
    });

    imageproc::drawing::draw_filled_rect_mut(
        &mut img,
        Rect::at(MARGIN as i32, MARGIN as i32).of_size(SWATCH_SIZE, SWATCH_SIZE),
        rgba(color),
    );

    if let Some(font) = font {
        // Text on the swatch uses the opposite tone for contrast.
        let on_swatch = match color.tone() {
            Tone::Light => Rgba([0x0f, 0x11, 0x17, 255]),
            Tone::Dark => Rgba([0xea, 0xea, 0xf2, 255]),
        };
        let scale = Scale::uniform(22.0);
        let hex = color.to_hex();
        let (t_width, t_height) = measure_line(font, &hex, scale);
        imageproc::drawing::draw_text_mut(
            &mut img,
            on_swatch,
            (MARGIN as f32 + (SWATCH_SIZE as f32 - t_width) / 2.0).round() as i32,
            (MARGIN as f32 + (SWATCH_SIZE as f32 - t_height) / 2.0).round() as i32,
            scale,
            font,
            &hex,
        );

        let text_x = (MARGIN * 2 + SWATCH_SIZE) as i32;
        let row_height = SWATCH_SIZE as f32 / Representation::ALL.len() as f32;
        for (i, representation) in Representation::ALL.iter().enumerate() {
            let text = format!("{}  {}", representation.label(), color.format(*representation));
            imageproc::drawing::draw_text_mut(
                &mut img,
                Rgba([0xea, 0xea, 0xf2, 255]),
                text_x,
                (MARGIN as f32 + row_height * i as f32 + row_height / 3.0).round() as i32,
                scale,
                font,
                &text,
            );
        }
    }

    img.save(path)
        .with_context(|| format!("could not write image to {}", path.display()))
}

fn measure_line(font: &Font, text: &str, scale: Scale) -> (f32, f32) {
    let width = font
        .layout(text, scale, point(0.0, 0.0))
        .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
        .last()
        .unwrap_or(0.0);

    let v_metrics = font.v_metrics(scale);
    let height = v_metrics.ascent - v_metrics.descent + v_metrics.line_gap;

    (width, height)
}
