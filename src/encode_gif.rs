//! Streaming GIF encoder: frames are quantized and written one at a time so
//! the whole animation never has to sit in memory.

use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use crate::{
    error::{RollinError, RollinResult},
    frames::FrameRgba,
};

/// Quantizer speed for `gif::Frame::from_rgba_speed` (1 = best palette,
/// 30 = fastest). 10 keeps flat-color art exact while staying quick.
const QUANTIZER_SPEED: i32 = 10;

#[derive(Clone, Debug)]
pub struct EncodeConfig {
    pub width: u32,
    pub height: u32,
    /// Per-frame display time in centiseconds (the GIF time base).
    pub delay_cs: u16,
    pub out_path: PathBuf,
    pub overwrite: bool,
}

impl EncodeConfig {
    pub fn validate(&self) -> RollinResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RollinError::config("encode width/height must be non-zero"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            // The GIF logical screen descriptor stores dimensions as u16.
            return Err(RollinError::config(format!(
                "encode width/height must fit in 16 bits, got {}x{}",
                self.width, self.height
            )));
        }
        if self.delay_cs == 0 {
            return Err(RollinError::config("frame delay must be >= 1 centisecond"));
        }
        Ok(())
    }
}

pub fn ensure_parent_dir(path: &Path) -> RollinResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Owns the output file for the duration of the encode; `finish` writes the
/// trailer and flushes. Dropping without `finish` leaves a truncated file
/// behind but releases the handle.
pub struct GifSink {
    cfg: EncodeConfig,
    encoder: gif::Encoder<BufWriter<File>>,
    frames_written: u64,
}

impl GifSink {
    pub fn new(cfg: EncodeConfig) -> RollinResult<Self> {
        cfg.validate()?;
        ensure_parent_dir(&cfg.out_path)?;

        if !cfg.overwrite && cfg.out_path.exists() {
            return Err(RollinError::config(format!(
                "output file '{}' already exists",
                cfg.out_path.display()
            )));
        }

        let file = File::create(&cfg.out_path).map_err(|e| {
            RollinError::encode(format!(
                "failed to create output file '{}': {e}",
                cfg.out_path.display()
            ))
        })?;

        let mut encoder = gif::Encoder::new(
            BufWriter::new(file),
            cfg.width as u16,
            cfg.height as u16,
            &[],
        )
        .map_err(|e| RollinError::encode(format!("failed to start gif encoder: {e}")))?;

        encoder
            .set_repeat(gif::Repeat::Infinite)
            .map_err(|e| RollinError::encode(format!("failed to set gif loop flag: {e}")))?;

        Ok(Self {
            cfg,
            encoder,
            frames_written: 0,
        })
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    pub fn encode_frame(&mut self, frame: &FrameRgba) -> RollinResult<()> {
        if frame.width != self.cfg.width || frame.height != self.cfg.height {
            return Err(RollinError::config(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, self.cfg.width, self.cfg.height
            )));
        }
        if frame.data.len() != (frame.width as usize) * (frame.height as usize) * 4 {
            return Err(RollinError::config(
                "frame.data size mismatch with width*height*4",
            ));
        }

        // The quantizer reserves a palette slot for fully transparent pixels,
        // which is what keeps the swept-in corners see-through.
        let mut rgba = frame.data.clone();
        let mut out = gif::Frame::from_rgba_speed(
            frame.width as u16,
            frame.height as u16,
            &mut rgba,
            QUANTIZER_SPEED,
        );
        out.delay = self.cfg.delay_cs;
        // Restore the background between frames so rotated corners of one
        // frame do not show through the transparency of the next.
        out.dispose = gif::DisposalMethod::Background;

        self.encoder
            .write_frame(&out)
            .map_err(|e| RollinError::encode(format!("failed to write gif frame: {e}")))?;
        self.frames_written += 1;
        Ok(())
    }

    pub fn finish(self) -> RollinResult<()> {
        let writer = self
            .encoder
            .into_inner()
            .map_err(|e| RollinError::encode(format!("failed to finalize gif stream: {e}")))?;
        writer
            .into_inner()
            .map_err(|e| RollinError::encode(format!("failed to flush gif output: {e}")))?;
        Ok(())
    }
}
