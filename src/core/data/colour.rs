#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness on a 0..=255 scale, used to pick readable label text.
    #[must_use]
    pub fn luma(&self) -> u8 {
        let luma = 0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64;
        luma.round().clamp(0.0, 255.0) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_extremes() {
        assert_eq!(Colour::BLACK.luma(), 0);
        assert_eq!(Colour::rgb(255, 255, 255).luma(), 255);
    }

    #[test]
    fn test_luma_weights_green_highest() {
        assert!(Colour::rgb(0, 255, 0).luma() > Colour::rgb(255, 0, 0).luma());
        assert!(Colour::rgb(255, 0, 0).luma() > Colour::rgb(0, 0, 255).luma());
    }
}
