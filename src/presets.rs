use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::color::{lab_to_hcl, Color};
use crate::error::{Error, Result};
use crate::soft_palette::{soft_palette, SoftPaletteSettings};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    /// Dark, desaturated and cool leaning. PS controller LEDs are very
    /// bright, so these stay easy on the eyes.
    Pastelle,
}

impl Palette {
    pub const ALL: [Palette; 1] = [Palette::Pastelle];

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Pastelle => "pastelle",
        }
    }

    pub fn settings(&self) -> SoftPaletteSettings {
        match self {
            Palette::Pastelle => SoftPaletteSettings {
                check_color: Some(pastelle),
                iterations: 70,
                many_samples: true,
            },
        }
    }

    /// Samples one color and clamps it into the displayable range.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Color> {
        let colors = soft_palette(1, &self.settings(), rng)?;
        colors
            .first()
            .map(|color| color.clamped())
            .ok_or(Error::SamplingFailure {
                requested: 1,
                available: 0,
            })
    }
}

impl FromStr for Palette {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Palette::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::UnsupportedPalette(s.to_string()))
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn pastelle(l: f64, a: f64, b: f64) -> bool {
    let (h, c, l) = lab_to_hcl(l, a, b);
    100.0 < h && h < 300.0 && 0.1 < c && c < 0.2 && l < 0.1
}

/// Resolves `name` and samples from it. Unknown names fail before any sampling.
pub fn pick<R: Rng + ?Sized>(name: &str, rng: &mut R) -> Result<Color> {
    name.parse::<Palette>()?.pick(rng)
}
