use std::path::{Path, PathBuf};

use crate::error::{RollinError, RollinResult};

/// Highest frame rate the GIF time base (centiseconds) and common browser
/// players actually honor. Higher requests are clamped, not rejected.
pub const MAX_FPS: f64 = 50.0;

/// Rotation sense of the animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    Anticlockwise,
}

impl Direction {
    /// CLI convention: 1 is clockwise, any other integer is anticlockwise.
    pub fn from_flag(flag: i64) -> Self {
        if flag == 1 {
            Self::Clockwise
        } else {
            Self::Anticlockwise
        }
    }

    pub fn sign(self) -> f64 {
        match self {
            Self::Clockwise => 1.0,
            Self::Anticlockwise => -1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Output dimensions; `None` keeps the source image size.
    pub size: Option<(u32, u32)>,
    pub fps: f64,
    pub duration_secs: f64,
    pub direction: Direction,
    pub out_path: PathBuf,
}

impl RenderConfig {
    pub fn validate(&self) -> RollinResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(RollinError::config("fps must be a positive number"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(RollinError::config("duration must be a positive number"));
        }
        if let Some((w, h)) = self.size
            && (w == 0 || h == 0)
        {
            return Err(RollinError::config("output width/height must be > 0"));
        }
        if self.frame_count() == 0 {
            return Err(RollinError::config(
                "fps x duration rounds to zero frames; increase one of them",
            ));
        }
        Ok(())
    }

    /// Requested fps after the playback-compatibility cap.
    pub fn effective_fps(&self) -> f64 {
        self.fps.min(MAX_FPS)
    }

    pub fn frame_count(&self) -> u64 {
        (self.effective_fps() * self.duration_secs).round().max(0.0) as u64
    }

    /// Per-frame display time in the GIF time base (centiseconds).
    pub fn frame_delay_cs(&self) -> u16 {
        ((100.0 / self.effective_fps()).round() as u16).max(1)
    }
}

/// Default output path: the input filename with a `.gif` extension.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("gif")
}

/// Force a `.gif` extension on a user-supplied output path.
pub fn coerce_gif_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("gif") => path.to_path_buf(),
        _ => path.with_extension("gif"),
    }
}

/// Parse an output size given as `W,H`.
pub fn parse_size(s: &str) -> RollinResult<(u32, u32)> {
    let (w, h) = s
        .split_once(',')
        .ok_or_else(|| RollinError::argument(format!("size must be W,H, got '{s}'")))?;
    let w = w
        .trim()
        .parse::<u32>()
        .map_err(|e| RollinError::argument(format!("bad width '{}': {e}", w.trim())))?;
    let h = h
        .trim()
        .parse::<u32>()
        .map_err(|e| RollinError::argument(format!("bad height '{}': {e}", h.trim())))?;
    Ok((w, h))
}
