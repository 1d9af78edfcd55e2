// src/device.rs
use log::{debug, info, warn};

use crate::color::Color;
use crate::commands::*;
use crate::error::{Error, Result};
use crate::sysfs::Sysfs;

/// The three per-channel sysfs entries of one LED.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelPaths {
    pub red: String,
    pub green: String,
    pub blue: String,
}

/// Strips the group marker, keeping the separator: `ctrl1@global` gives `ctrl1@`.
fn channel_prefix(device: &str) -> Option<&str> {
    let prefix = device.strip_suffix(GROUP_MARKER)?;
    if prefix.ends_with(SEPARATORS) {
        Some(prefix)
    } else {
        None
    }
}

fn stat(sysfs: &impl Sysfs, path: &str) -> Result<()> {
    sysfs.stat(path).map_err(|source| Error::NotFound {
        path: path.to_string(),
        source,
    })
}

/// Derives the red, green and blue siblings of a `<prefix>@global` device and
/// checks that all of them exist. Nothing is written.
pub fn resolve(sysfs: &impl Sysfs, device: &str) -> Result<ChannelPaths> {
    stat(sysfs, device)?;

    let prefix = channel_prefix(device).ok_or_else(|| Error::InvalidFormat(device.to_string()))?;

    let paths = ChannelPaths {
        red: channel_path(prefix, CHANNEL_RED),
        green: channel_path(prefix, CHANNEL_GREEN),
        blue: channel_path(prefix, CHANNEL_BLUE),
    };

    for path in [&paths.red, &paths.green, &paths.blue] {
        stat(sysfs, path)?;
    }

    debug!("resolved {} to {:?}", device, paths);
    Ok(paths)
}

/// Writes `value` to `<channel>/brightness`.
///
/// The channel is stat'ed again here even though `resolve` already did; the
/// open itself never creates the attribute.
pub fn write_channel(sysfs: &impl Sysfs, channel: &str, value: u8) -> Result<()> {
    stat(sysfs, channel)?;
    debug!("{} still present", channel);

    let path = brightness_path(channel);
    sysfs
        .write_attribute(&path, &brightness(value))
        .map_err(|source| Error::WriteFailure { path, source })?;
    info!("{} <- {}", channel, value);
    Ok(())
}

pub struct LedDevice<'a, S: Sysfs> {
    sysfs: &'a S,
    channels: ChannelPaths,
}

impl<'a, S: Sysfs> LedDevice<'a, S> {
    pub fn open(sysfs: &'a S, device: &str) -> Result<Self> {
        let channels = resolve(sysfs, device)?;
        Ok(Self { sysfs, channels })
    }

    pub fn channels(&self) -> &ChannelPaths {
        &self.channels
    }

    /// Red, then green, then blue. Stops at the first failure without
    /// touching the remaining channels or undoing earlier ones.
    pub fn set_colors(&self, color: &Color) -> Result<()> {
        let (r, g, b) = color.rgb255();
        self.set_color(r, g, b)
    }

    pub fn set_color(&self, r: u8, g: u8, b: u8) -> Result<()> {
        let writes = [
            (&self.channels.red, r),
            (&self.channels.green, g),
            (&self.channels.blue, b),
        ];
        for (i, (channel, value)) in writes.into_iter().enumerate() {
            if let Err(e) = write_channel(self.sysfs, channel, value) {
                if i > 0 {
                    warn!(
                        "{} of 3 channels written before {} failed, LED left partially updated",
                        i, channel
                    );
                }
                return Err(e);
            }
        }
        Ok(())
    }
}
