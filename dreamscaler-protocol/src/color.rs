//! RGBW color as carried on the wire

/// Four-channel pixel color
///
/// Channels travel in `r, g, b, w` order in every payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    /// All channels off
    pub const BLACK: Rgbw = Rgbw::new(0, 0, 0, 0);

    /// Create a color from all four channels
    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Color with the white channel off
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0)
    }

    /// Color with only the white channel lit
    pub const fn white(w: u8) -> Self {
        Self::new(0, 0, 0, w)
    }

    /// Parse from wire order `[r, g, b, w]`
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to wire order `[r, g, b, w]`
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.w]
    }

    /// Apply `f` to every channel
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b), f(self.w))
    }
}
