#![forbid(unsafe_code)]

pub mod config;
pub mod encode_gif;
pub mod error;
pub mod frames;
pub mod pipeline;
pub mod raster;

pub use config::{Direction, MAX_FPS, RenderConfig};
pub use error::{RollinError, RollinResult};
pub use frames::{FramePlan, FrameRgba, FrameSequence};
pub use pipeline::{load_source, render_to_gif};
