use image::Rgb;

/// Maps an identity (usually a track id) to a display color.
///
/// Implementations must be pure within a run: the same id always yields the
/// same color, so an object keeps its color for as long as it is tracked.
pub trait Palette {
    /// Color for identity `id`.
    fn color_for(&self, id: u64) -> Rgb<u8>;
}

impl<F> Palette for F
where
    F: Fn(u64) -> Rgb<u8>,
{
    fn color_for(&self, id: u64) -> Rgb<u8> {
        self(id)
    }
}

const HEX: [u32; 20] = [
    0x042AFF, 0x0BDBEB, 0xF3F3F3, 0x00DFB7, 0x111F68, 0xFF6FDD, 0xFF444F, 0xCCED00, 0x00F344,
    0xBD00FF, 0x00B4FF, 0xDD00BA, 0x00FFFF, 0x26C000, 0x01FFB3, 0x7D24FF, 0x7B0068, 0xFF1B6C,
    0xFC6D2F, 0xA2FF0B,
];

/// Fixed 20-color palette cycled by identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPalette;

impl IdentityPalette {
    /// Number of colors before the palette repeats.
    pub const LEN: usize = HEX.len();
}

impl Palette for IdentityPalette {
    fn color_for(&self, id: u64) -> Rgb<u8> {
        let hex = HEX[(id % Self::LEN as u64) as usize];
        Rgb([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
    }
}
