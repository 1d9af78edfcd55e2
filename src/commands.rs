// src/commands.rs

/// Trailing token of the path addressing the whole RGB unit.
pub const GROUP_MARKER: &str = "global";

/// Characters allowed between the device prefix and the group marker.
pub const SEPARATORS: [char; 2] = ['@', ':'];

pub const CHANNEL_RED: &str = "red";
pub const CHANNEL_GREEN: &str = "green";
pub const CHANNEL_BLUE: &str = "blue";

/// Attribute written inside every channel directory.
pub const BRIGHTNESS: &str = "brightness";

pub fn channel_path(prefix: &str, channel: &str) -> String {
    format!("{}{}", prefix, channel)
}

pub fn brightness_path(channel_path: &str) -> String {
    format!("{}/{}", channel_path, BRIGHTNESS)
}

/// Decimal ASCII, no newline or padding.
pub fn brightness(level: u8) -> String {
    level.to_string()
}
