use egui::Color32;

/// An opaque 8-bit-per-channel color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GRID: Rgb = Rgb::new(200, 200, 200);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color32 {
    fn from(c: Rgb) -> Self {
        Color32::from_rgb(c.r, c.g, c.b)
    }
}

impl From<Color32> for Rgb {
    fn from(c: Color32) -> Self {
        Rgb::new(c.r(), c.g(), c.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color32_conversion() {
        let grey: Color32 = Rgb::GRID.into();
        assert_eq!(grey, Color32::from_rgb(200, 200, 200));
        assert_eq!(Rgb::from(Color32::from_rgb(1, 2, 3)), Rgb::new(1, 2, 3));
    }
}
