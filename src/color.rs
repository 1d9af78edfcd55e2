use palette::white_point::D65;
use palette::convert::FromColorUnclamped;
use palette::{Clamp, IsWithinBounds, Lab, Srgb};

/// Lab coordinates in unit scale: L in [0, 1], a and b roughly in [-1, 1].
/// This is CIE L*a*b* divided by 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabPoint {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl LabPoint {
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    pub fn distance(&self, other: &LabPoint) -> f64 {
        let (dl, da, db) = (self.l - other.l, self.a - other.a, self.b - other.b);
        (dl * dl + da * da + db * db).sqrt()
    }

    fn to_cie(self) -> Lab<D65, f64> {
        Lab::new(self.l * 100.0, self.a * 100.0, self.b * 100.0)
    }
}

/// Cylindrical form of a Lab point: (hue in degrees [0, 360), chroma, lightness).
pub fn lab_to_hcl(l: f64, a: f64, b: f64) -> (f64, f64, f64) {
    let h = b.atan2(a).to_degrees().rem_euclid(360.0);
    let c = a.hypot(b);
    (h, c, l)
}

/// An sRGB color. Components may leave [0, 1] until clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Srgb<f64>);

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Color(Srgb::new(r, g, b))
    }

    pub fn from_lab(lab: LabPoint) -> Self {
        Color(Srgb::from_color_unclamped(lab.to_cie()))
    }

    pub fn to_lab(self) -> LabPoint {
        let lab = Lab::<D65, f64>::from_color_unclamped(self.0);
        LabPoint::new(lab.l / 100.0, lab.a / 100.0, lab.b / 100.0)
    }

    pub fn hcl(self) -> (f64, f64, f64) {
        let lab = self.to_lab();
        lab_to_hcl(lab.l, lab.a, lab.b)
    }

    /// True when every channel is displayable.
    pub fn is_valid(&self) -> bool {
        self.0.is_within_bounds()
    }

    #[must_use]
    pub fn clamped(self) -> Self {
        Color(Clamp::clamp(self.0))
    }

    pub fn rgb255(&self) -> (u8, u8, u8) {
        let rgb: Srgb<u8> = Clamp::clamp(self.0).into_format();
        (rgb.red, rgb.green, rgb.blue)
    }
}
