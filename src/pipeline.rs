use std::path::Path;

use image::RgbaImage;

use crate::{
    config::{MAX_FPS, RenderConfig},
    encode_gif::{EncodeConfig, GifSink},
    error::{RollinError, RollinResult},
    frames::{FramePlan, FrameSequence},
};

/// Decode the source image into straight-alpha RGBA8.
pub fn load_source(path: &Path) -> RollinResult<RgbaImage> {
    let img = image::open(path).map_err(|e| {
        RollinError::input(format!("cannot decode '{}' as an image: {e}", path.display()))
    })?;
    Ok(img.to_rgba8())
}

/// Render the full rotation animation of `src` to the configured output
/// path. Returns the number of frames written.
#[tracing::instrument(skip(src, cfg), fields(out = %cfg.out_path.display()))]
pub fn render_to_gif(src: &RgbaImage, cfg: &RenderConfig) -> RollinResult<u64> {
    cfg.validate()?;
    if cfg.fps > MAX_FPS {
        tracing::warn!(
            requested = cfg.fps,
            cap = MAX_FPS,
            "fps above the playback cap, clamping"
        );
    }

    let (width, height) = cfg.size.unwrap_or_else(|| src.dimensions());
    let count = cfg.frame_count();
    let plan = FramePlan::new(count, cfg.direction)?;

    let mut sink = GifSink::new(EncodeConfig {
        width,
        height,
        delay_cs: cfg.frame_delay_cs(),
        out_path: cfg.out_path.clone(),
        overwrite: true,
    })?;

    tracing::info!(frames = count, width, height, "generating frames");
    let progress_every = (count / 10).max(1);
    for frame in FrameSequence::new(src, plan, (width, height)) {
        sink.encode_frame(&frame)?;
        let done = sink.frames_written();
        if done % progress_every == 0 && done != count {
            tracing::info!(done, total = count, "generating frames");
        }
    }
    sink.finish()?;

    tracing::info!(frames = count, "wrote gif");
    Ok(count)
}
