//! Terminal front end for randhue: shows a random color with its HEX, RGB and
//! HSL representations and copies them to the clipboard.

mod clipboard;
mod render;

use std::io::BufRead;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;
use randhue::{config, Clipboard, Config, Driver, Focus, Representation};
use tracing_subscriber::EnvFilter;

use crate::clipboard::TerminalClipboard;

#[derive(Debug, Parser)]
#[command(name = "swatch", about = "Random colors, ready to copy")]
struct Args {
    /// Seed for reproducible colors
    #[arg(long)]
    seed: Option<u64>,

    /// Copy a representation (hex, rgb or hsl) of the generated color
    #[arg(long)]
    copy: Option<Representation>,

    /// Read commands from stdin: `g` or a space regenerates, `hex`, `rgb`
    /// and `hsl` copy, `q` quits
    #[arg(long, short)]
    interactive: bool,

    /// Render the final color to a PNG swatch
    #[arg(long)]
    out: Option<PathBuf>,

    /// TrueType font used for labels in the PNG swatch
    #[arg(long, requires = "out")]
    font: Option<PathBuf>,

    /// Never use the terminal (OSC 52) clipboard
    #[arg(long)]
    no_osc52: bool,

    /// Luminance above which a color counts as light
    #[arg(long, default_value_t = config::TONE_THRESHOLD)]
    tone_threshold: f64,

    /// How long a copy stays acknowledged, in milliseconds
    #[arg(long, default_value_t = config::ACKNOWLEDGMENT_MILLIS)]
    ack_millis: u64,
}

enum Command {
    Key(String),
    Copy(Representation),
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line == " " {
        return Command::Key(line.to_string());
    }
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" => Command::Quit,
        _ => match trimmed.parse::<Representation>() {
            Ok(representation) => Command::Copy(representation),
            Err(_) if trimmed.chars().count() == 1 => Command::Key(trimmed.to_string()),
            Err(_) => Command::Unknown(trimmed.to_string()),
        },
    }
}

fn copy<C: Clipboard, R: rand::Rng>(driver: &mut Driver<C, R>, representation: Representation) {
    let now = Instant::now();
    if !driver.copy(representation, now) {
        eprintln!("could not copy {}", representation.label());
    }
    render::print_controls(driver, now);
}

fn run_interactive<C: Clipboard, R: rand::Rng>(driver: &mut Driver<C, R>) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        driver.tick(Instant::now());
        match parse_command(&line) {
            Command::Key(key) => {
                if driver.handle_key(&key, Focus::None) {
                    render::print_controls(driver, Instant::now());
                }
            }
            Command::Copy(representation) => copy(driver, representation),
            Command::Quit => break,
            Command::Unknown(text) => eprintln!("unknown command {text:?}"),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let font = args.font.as_deref().map(render::load_font).transpose()?;

    let config = Config {
        tone_threshold: args.tone_threshold,
        acknowledgment: Duration::from_millis(args.ack_millis),
        ..Config::default()
    };

    let rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(Pcg32::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let clipboard = TerminalClipboard::detect(!args.no_osc52);
    let mut driver = Driver::with_rng(clipboard, config, rng);
    driver.initialize();
    driver.subscribe(render::print_color);
    println!("  {}", driver.describe());

    if let Some(representation) = args.copy {
        copy(&mut driver, representation);
    }

    if args.interactive {
        run_interactive(&mut driver)?;
    }

    if let Some(out) = &args.out {
        render::write_png(out, &driver.current(), font.as_ref())?;
        println!("wrote {}", out.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert!(matches!(parse_command(" "), Command::Key(k) if k == " "));
        assert!(matches!(parse_command("g\n"), Command::Key(k) if k == "g"));
        assert!(matches!(parse_command("G"), Command::Key(k) if k == "G"));
        assert!(matches!(parse_command("hex"), Command::Copy(Representation::Hex)));
        assert!(matches!(parse_command(" HSL "), Command::Copy(Representation::Hsl)));
        assert!(matches!(parse_command("q"), Command::Quit));
        assert!(matches!(parse_command("cmyk"), Command::Unknown(_)));
    }

    #[test]
    fn args_parse() {
        let args = Args::parse_from(["swatch", "--seed", "7", "--copy", "rgb"]);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.copy, Some(Representation::Rgb));
        assert_eq!(args.ack_millis, 1400);
        assert!(!args.interactive);
    }
}
