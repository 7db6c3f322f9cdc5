use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use qrtint::color::Rgb;
use qrtint::error::Error;
use qrtint::interactive::{self, Request};
use qrtint::recolor;
use qrtint::render;
use qrtint::style::{EcLevel, ModuleShape, StyleOptions};

/// Parse and validate image size (positive pixels)
fn parse_size(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("size must be a positive integer, got '{s}'")),
    }
}

/// Parse and validate QR version (1-40)
fn parse_version(s: &str) -> Result<u8, String> {
    match s.parse::<u8>() {
        Ok(v) if (1..=40).contains(&v) => Ok(v),
        _ => Err(format!("QR version must be between 1 and 40, got '{s}'")),
    }
}

/// Generate styled QR codes with custom colors, transparency, and module shapes
#[derive(Parser, Debug)]
#[command(name = "qrtint", version, about, long_about = None)]
struct Args {
    /// Text or URL to encode; prompts interactively when omitted
    data: Option<String>,

    /// Error correction level: L, M, Q, or H
    #[arg(short, long, default_value = "M", value_parser = EcLevel::parse)]
    error_correction: EcLevel,

    /// Output image edge length in pixels
    #[arg(short, long, default_value = "300", value_parser = parse_size)]
    size: u32,

    /// Quiet zone width in modules
    #[arg(short, long, default_value_t = 4)]
    margin: u32,

    /// Foreground (module) color as hex
    #[arg(short, long, default_value = "#000000")]
    foreground_color: String,

    /// Background color as hex, or "transparent"
    #[arg(short, long, default_value = "#ffffff")]
    background_color: String,

    /// Module shape
    #[arg(long, value_enum, default_value_t = ModuleShape::Square)]
    module_shape: ModuleShape,

    /// Fixed QR version 1-40 (smallest that fits when omitted)
    #[arg(long, value_parser = parse_version)]
    qr_version: Option<u8>,

    /// Output file path
    #[arg(short, long, default_value = "qrcode.png")]
    output: PathBuf,

    /// Skip the terminal preview
    #[arg(long)]
    no_terminal: bool,

    /// Force the prompt-driven flow even when data is given
    #[arg(short, long)]
    interactive: bool,
}

impl Args {
    fn into_request(self) -> io::Result<Request> {
        match self.data {
            Some(payload) if !self.interactive => {
                let transparent = self.background_color.eq_ignore_ascii_case("transparent");
                let background = if transparent {
                    Rgb::WHITE
                } else {
                    Rgb::from_hex(&self.background_color)
                };
                Ok(Request {
                    payload,
                    options: StyleOptions {
                        foreground: Rgb::from_hex(&self.foreground_color),
                        background,
                        transparent,
                        shape: self.module_shape,
                        size: self.size,
                        margin: self.margin,
                        ec_level: self.error_correction,
                        version: self.qr_version,
                    },
                    output: self.output,
                })
            }
            _ => {
                let stdin = io::stdin();
                let stderr = io::stderr();
                interactive::prompt_request(&mut stdin.lock(), &mut stderr.lock())
            }
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let no_terminal = args.no_terminal;
    let request = args.into_request()?;

    let raster = render::encode_raster(&request.payload, &request.options)?;
    if !no_terminal {
        let preview =
            render::terminal_string(&request.payload, request.options.ec_level, false)?;
        print!("{preview}");
    }

    let base = render::png_bytes(&raster.image)?;
    let styled = recolor::apply_style(&base, &request.options, raster.geometry);
    let written = render::write_bytes(&request.output, &styled)?;
    println!("Saved QR code to {}", written.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(args) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "error: {err}");
        process::exit(1);
    }
}
