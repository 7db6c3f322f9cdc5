//! End-to-end pipeline tests: encode, classify, recolor, serialize, write.

use qrtint::color::Rgb;
use qrtint::recolor::apply_style;
use qrtint::render::{encode_raster, png_bytes, write_bytes};
use qrtint::style::{ModuleShape, StyleOptions};

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory(png).unwrap().to_rgba8()
}

#[test]
fn transparent_output_opaque_count_matches_unstyled_ink() {
    // Black foreground, transparent background: the resolver inverts black
    // to white, so the baseline is a plain black-on-white rendering.
    let opts = StyleOptions {
        transparent: true,
        ..Default::default()
    };
    let raster = encode_raster("https://example.com", &opts).unwrap();
    let ink = raster
        .image
        .pixels()
        .filter(|p| p.0 == [0, 0, 0, 255])
        .count();
    assert!(ink > 0);

    let base = png_bytes(&raster.image).unwrap();
    let styled = decode(&apply_style(&base, &opts, raster.geometry));
    assert_eq!(styled.dimensions(), raster.image.dimensions());

    let mut opaque = 0usize;
    let mut clear = 0usize;
    for pixel in styled.pixels() {
        match pixel.0 {
            [0, 0, 0, 255] => opaque += 1,
            [0, 0, 0, 0] => clear += 1,
            other => panic!("unexpected pixel {other:?}"),
        }
    }
    assert_eq!(opaque, ink);
    assert_eq!(opaque + clear, (styled.width() * styled.height()) as usize);
}

#[test]
fn opaque_output_uses_exactly_the_requested_colors() {
    let opts = StyleOptions {
        foreground: Rgb::from_hex("#0000ff"),
        background: Rgb::from_hex("#ffff00"),
        ..Default::default()
    };
    let raster = encode_raster("colored", &opts).unwrap();
    let base = png_bytes(&raster.image).unwrap();
    let styled = decode(&apply_style(&base, &opts, raster.geometry));

    let mut fg = 0usize;
    for pixel in styled.pixels() {
        assert_eq!(pixel.0[3], 255, "opaque mode must keep full alpha");
        match pixel.0 {
            [0, 0, 255, 255] => fg += 1,
            [255, 255, 0, 255] => {}
            other => panic!("unexpected pixel {other:?}"),
        }
    }
    assert!(fg > 0);
}

#[test]
fn degenerate_equal_colors_produce_uniform_output() {
    let gray = Rgb::from_hex("#808080");
    let opts = StyleOptions {
        foreground: gray,
        background: gray,
        ..Default::default()
    };
    let raster = encode_raster("no signal", &opts).unwrap();
    let base = png_bytes(&raster.image).unwrap();
    let styled = decode(&apply_style(&base, &opts, raster.geometry));
    for pixel in styled.pixels() {
        assert_eq!(pixel.0, [128, 128, 128, 255]);
    }
}

#[test]
fn circle_shape_keeps_fewer_ink_pixels_than_square() {
    let square = StyleOptions::default();
    let circle = StyleOptions {
        shape: ModuleShape::Circle,
        ..Default::default()
    };

    let raster = encode_raster("shaped modules", &square).unwrap();
    let base = png_bytes(&raster.image).unwrap();
    let count_ink = |opts: &StyleOptions| {
        decode(&apply_style(&base, opts, raster.geometry))
            .pixels()
            .filter(|p| p.0 == [0, 0, 0, 255])
            .count()
    };

    let square_ink = count_ink(&square);
    let circle_ink = count_ink(&circle);
    assert!(circle_ink > 0);
    assert!(
        circle_ink < square_ink,
        "inscribed-circle masking must drop corner pixels ({circle_ink} vs {square_ink})"
    );
}

#[test]
fn styling_failure_returns_base_bytes_unchanged() {
    let opts = StyleOptions::default();
    let raster = encode_raster("fallback", &opts).unwrap();
    let not_png = b"\x89PNG but truncated".to_vec();
    let out = apply_style(&not_png, &opts, raster.geometry);
    assert_eq!(out, not_png);
}

#[test]
fn write_creates_missing_directories_and_returns_absolute_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("qr.png");

    let opts = StyleOptions::default();
    let raster = encode_raster("write me", &opts).unwrap();
    let bytes = png_bytes(&raster.image).unwrap();

    let written = write_bytes(&path, &bytes).unwrap();
    assert!(written.is_absolute());
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}
