//! Prompt-driven input flow.
//!
//! Entered when no payload is given on the command line or `--interactive`
//! is passed. Every prompt shows its default and accepts empty input as
//! that default; out-of-range numeric answers are re-asked here so they
//! never reach the rendering core. Color answers are lenient like the rest
//! of the crate: anything unparseable becomes black.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::color::Rgb;
use crate::style::{EcLevel, ModuleShape, StyleOptions};

/// Everything the prompt flow collects for one generation request.
#[derive(Debug)]
pub struct Request {
    pub payload: String,
    pub options: StyleOptions,
    pub output: PathBuf,
}

/// Runs the full prompt sequence against arbitrary input/output streams.
///
/// Streams are parameters rather than hardwired stdio so tests can drive
/// the flow with cursors; `main` passes locked stdin/stderr.
pub fn prompt_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> std::io::Result<Request> {
    let payload = ask_required(input, output, "Data to encode")?;
    let ec_level = ask_parsed(input, output, "Error correction (L/M/Q/H)", "M", |s| {
        EcLevel::parse(s)
    })?;
    let size = ask_parsed(input, output, "Image size in pixels", "300", parse_positive)?;
    let margin = ask_parsed(input, output, "Margin in modules", "4", parse_non_negative)?;
    let foreground = ask_parsed(input, output, "Foreground color", "#000000", |s| {
        Ok::<_, String>(Rgb::from_hex(s))
    })?;
    let background_raw = ask_with_default(input, output, "Background color (hex or 'transparent')", "#ffffff")?;
    let transparent = background_raw.eq_ignore_ascii_case("transparent");
    let background = if transparent {
        Rgb::WHITE
    } else {
        Rgb::from_hex(&background_raw)
    };
    let shape = ask_parsed(input, output, "Module shape (square/circle)", "square", |s| {
        match s.to_ascii_lowercase().as_str() {
            "square" => Ok(ModuleShape::Square),
            "circle" => Ok(ModuleShape::Circle),
            _ => Err(format!("unknown shape '{s}'")),
        }
    })?;
    let version = ask_parsed(input, output, "QR version (1-40, empty for auto)", "auto", |s| {
        if s.eq_ignore_ascii_case("auto") || s == "0" {
            return Ok(None);
        }
        match s.parse::<u8>() {
            Ok(v) if (1..=40).contains(&v) => Ok(Some(v)),
            _ => Err(format!("version must be between 1 and 40, got '{s}'")),
        }
    })?;
    let output_path = ask_with_default(input, output, "Output file", "qrcode.png")?;

    Ok(Request {
        payload,
        options: StyleOptions {
            foreground,
            background,
            transparent,
            shape,
            size,
            margin,
            ec_level,
            version,
        },
        output: PathBuf::from(output_path),
    })
}

fn parse_positive(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, got '{s}'")),
    }
}

fn parse_non_negative(s: &str) -> Result<u32, String> {
    s.parse::<u32>()
        .map_err(|_| format!("expected a non-negative integer, got '{s}'"))
}

/// Asks until a non-empty answer arrives.
fn ask_required<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> std::io::Result<String> {
    loop {
        let answer = ask(input, output, &format!("{prompt}: "))?;
        if !answer.is_empty() {
            return Ok(answer);
        }
        writeln!(output, "A value is required.")?;
    }
}

/// Asks once; empty input yields the default verbatim.
fn ask_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
) -> std::io::Result<String> {
    let answer = ask(input, output, &format!("{prompt} [{default}]: "))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Asks until `parse` accepts the answer; empty input retries with the
/// default string instead.
fn ask_parsed<R, W, T, F, E>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
    parse: F,
) -> std::io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    loop {
        let answer = ask_with_default(input, output, prompt, default)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> std::io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> Request {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut sink = Vec::new();
        prompt_request(&mut reader, &mut sink).unwrap()
    }

    #[test]
    fn test_all_defaults() {
        let request = run("hello\n\n\n\n\n\n\n\n\n");
        assert_eq!(request.payload, "hello");
        assert_eq!(request.options.ec_level, EcLevel::Medium);
        assert_eq!(request.options.size, 300);
        assert_eq!(request.options.margin, 4);
        assert_eq!(request.options.foreground, Rgb::BLACK);
        assert_eq!(request.options.background, Rgb::WHITE);
        assert!(!request.options.transparent);
        assert_eq!(request.options.shape, ModuleShape::Square);
        assert_eq!(request.options.version, None);
        assert_eq!(request.output, PathBuf::from("qrcode.png"));
    }

    #[test]
    fn test_empty_payload_is_reasked() {
        let request = run("\n\nfinally\n\n\n\n\n\n\n\n\n");
        assert_eq!(request.payload, "finally");
    }

    #[test]
    fn test_out_of_range_values_are_reasked() {
        // Bad EC level, zero size, and version 99 each get one retry.
        let request = run("data\nZ\nq\n0\n120\n\n\ntransparent\ncircle\n99\n7\nout.png\n");
        assert_eq!(request.options.ec_level, EcLevel::Quartile);
        assert_eq!(request.options.size, 120);
        assert!(request.options.transparent);
        assert_eq!(request.options.shape, ModuleShape::Circle);
        assert_eq!(request.options.version, Some(7));
        assert_eq!(request.output, PathBuf::from("out.png"));
    }

    #[test]
    fn test_malformed_color_answer_defaults_to_black() {
        let request = run("data\n\n\n\nnot-a-color\n#ABCDEF\n\n\n\n");
        assert_eq!(request.options.foreground, Rgb::BLACK);
        assert_eq!(request.options.background, Rgb::new(0xab, 0xcd, 0xef));
    }
}
