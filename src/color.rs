// MIT/Apache2 License

/// A four-element color, with eight bits per channel.
///
/// Two colors are only equal if all four channels match exactly. Region growing relies on this.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new, fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Gets the red element.
    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    /// Gets the green element.
    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    /// Gets the blue element.
    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    /// Gets the alpha element.
    #[inline]
    pub fn alpha(self) -> u8 {
        self.a
    }

    /// The channels as an array, in RGBA order.
    #[inline]
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    #[inline]
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}
