use std::path::PathBuf;

use rollin::{Direction, RenderConfig, render_to_gif};

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> image::RgbaImage {
    let mut img = image::RgbaImage::new(w, h);
    for px in img.pixels_mut() {
        *px = image::Rgba(rgba);
    }
    img
}

fn decode_frames(path: &PathBuf) -> Vec<(u32, u32, Vec<u8>)> {
    let mut options = gif::DecodeOptions::new();
    options.set_color_output(gif::ColorOutput::RGBA);
    let mut decoder = options
        .read_info(std::fs::File::open(path).unwrap())
        .unwrap();

    let mut frames = Vec::new();
    while let Some(frame) = decoder.read_next_frame().unwrap() {
        frames.push((
            u32::from(frame.width),
            u32::from(frame.height),
            frame.buffer.to_vec(),
        ));
    }
    frames
}

fn tmp(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("render_gif_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn round_trip_produces_frame_count_and_size() {
    let src = solid(100, 100, [255, 0, 0, 255]);
    let out_path = tmp("ten_frames.gif");

    let cfg = RenderConfig {
        size: Some((40, 40)),
        fps: 10.0,
        duration_secs: 1.0,
        direction: Direction::Clockwise,
        out_path: out_path.clone(),
    };
    assert_eq!(render_to_gif(&src, &cfg).unwrap(), 10);

    let frames = decode_frames(&out_path);
    assert_eq!(frames.len(), 10);
    for (w, h, buf) in &frames {
        assert_eq!((*w, *h), (40, 40));
        assert_eq!(buf.len(), 40 * 40 * 4);
    }
}

#[test]
fn frame_zero_keeps_the_source_orientation() {
    let src = solid(50, 50, [255, 0, 0, 255]);
    let out_path = tmp("identity_first.gif");

    let cfg = RenderConfig {
        size: None,
        fps: 4.0,
        duration_secs: 1.0,
        direction: Direction::Clockwise,
        out_path: out_path.clone(),
    };
    render_to_gif(&src, &cfg).unwrap();

    let frames = decode_frames(&out_path);
    let (w, _, first) = &frames[0];

    // Center pixel of the unrotated first frame stays red (palette
    // quantization may nudge channels slightly).
    let o = ((25 * w + 25) * 4) as usize;
    assert!(first[o] > 200, "red channel was {}", first[o]);
    assert!(first[o + 1] < 55 && first[o + 2] < 55);
    assert_eq!(first[o + 3], 255);

    // Unrotated, so even the corners are still opaque.
    assert_eq!(first[3], 255);
}

#[test]
fn rotated_corners_become_transparent() {
    let src = solid(64, 64, [0, 128, 255, 255]);
    let out_path = tmp("transparent_corners.gif");

    // 8 frames: frame 1 is a 45-degree rotation.
    let cfg = RenderConfig {
        size: None,
        fps: 8.0,
        duration_secs: 1.0,
        direction: Direction::Clockwise,
        out_path: out_path.clone(),
    };
    render_to_gif(&src, &cfg).unwrap();

    let frames = decode_frames(&out_path);
    assert_eq!(frames.len(), 8);

    let (_, _, mid_turn) = &frames[1];
    assert_eq!(mid_turn[3], 0, "swept corner should be transparent");

    let o = ((32 * 64 + 32) * 4) as usize;
    assert_eq!(mid_turn[o + 3], 255, "center should stay opaque");
}

#[test]
fn default_size_is_the_source_size() {
    let src = solid(30, 20, [10, 200, 10, 255]);
    let out_path = tmp("native_size.gif");

    let cfg = RenderConfig {
        size: None,
        fps: 2.0,
        duration_secs: 1.0,
        direction: Direction::Anticlockwise,
        out_path: out_path.clone(),
    };
    render_to_gif(&src, &cfg).unwrap();

    let frames = decode_frames(&out_path);
    assert_eq!(frames.len(), 2);
    assert_eq!((frames[0].0, frames[0].1), (30, 20));
}
