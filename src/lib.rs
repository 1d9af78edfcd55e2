//! Picks a dim, non aggressive color and writes it to the red, green and blue
//! sysfs channels of an LED, typically the light bar of a PS controller.

pub mod color;
pub mod commands;
pub mod device;
pub mod error;
pub mod presets;
pub mod soft_palette;
pub mod sysfs;

use std::fmt;

use log::debug;
use rand::Rng;

pub use color::Color;
pub use device::{ChannelPaths, LedDevice};
pub use error::{Error, Result};
pub use presets::Palette;
pub use sysfs::{HostSysfs, Sysfs};

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// A device ending in `@global` or `:global`.
    pub device: String,
    pub palette: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            device: String::new(),
            palette: Palette::Pastelle.name().to_string(),
        }
    }
}

/// What was written where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub channels: ChannelPaths,
    pub rgb: (u8, u8, u8),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.rgb;
        writeln!(f, "Red ({}): {}", self.channels.red, r)?;
        writeln!(f, "Green ({}): {}", self.channels.green, g)?;
        write!(f, "Blue ({}): {}", self.channels.blue, b)
    }
}

/// Resolves the channels, picks a color and writes it, stopping at the first error.
pub fn run<S: Sysfs, R: Rng + ?Sized>(config: &Config, sysfs: &S, rng: &mut R) -> Result<Outcome> {
    let device = LedDevice::open(sysfs, &config.device)?;
    let color = presets::pick(&config.palette, rng)?;
    debug!("picked {:?} from {}", color, config.palette);

    device.set_colors(&color)?;
    Ok(Outcome {
        channels: device.channels().clone(),
        rgb: color.rgb255(),
    })
}
