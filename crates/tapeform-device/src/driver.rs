#![forbid(unsafe_code)]

//! Receipt driver contract.
//!
//! The label workflow issues these commands in a fixed order and never
//! looks at the wire representation; a driver renders them however its
//! hardware wants. Each command may fail independently, so every method
//! returns the driver's own error type.

/// Device font selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    /// The device's primary font.
    #[default]
    A,
    /// The condensed secondary font used for message bodies.
    B,
}

/// Horizontal alignment for subsequent output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarcodeKind {
    /// Code 39, the symbology used for numeric label ids.
    Code39,
}

/// Commands a receipt device accepts, in the vocabulary the label
/// workflow speaks.
///
/// Text handed to [`print_line`](Self::print_line) is already wrapped to
/// the device's column budget; drivers print it verbatim.
pub trait ReceiptDriver {
    /// Driver-specific failure type.
    type Error;

    /// Reset the device to a known state at the start of a job.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Toggle smoothing of enlarged glyphs.
    fn smooth(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Select the active font.
    fn font(&mut self, font: Font) -> Result<(), Self::Error>;

    /// Set glyph width and height multipliers (1 is natural size).
    fn size(&mut self, width: u8, height: u8) -> Result<(), Self::Error>;

    /// Set alignment for subsequent lines.
    fn align(&mut self, align: Align) -> Result<(), Self::Error>;

    /// Print one already-wrapped line followed by a line feed.
    fn print_line(&mut self, line: &str) -> Result<(), Self::Error>;

    /// Print a barcode for `payload` in the given symbology.
    fn barcode(&mut self, payload: &str, kind: BarcodeKind) -> Result<(), Self::Error>;

    /// Cut the paper.
    fn cut(&mut self) -> Result<(), Self::Error>;

    /// Finish the job and release the device for the next one.
    fn end(&mut self) -> Result<(), Self::Error>;
}
