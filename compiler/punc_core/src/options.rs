//! Scanner option bits.

use bitflags::bitflags;

bitflags! {
    /// Options controlling how quote characters are scanned.
    ///
    /// When a quote flag is absent, that quote character is an ordinary
    /// word byte. Bit values are stable (`0x01` single, `0x02` double), so
    /// raw masks round-trip through `from_bits`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ScanOptions: u8 {
        /// Scan `'...'` as a single word token.
        const ACCEPT_SINGLE_QUOTES = 0x01;
        /// Scan `"..."` as a single word token.
        const ACCEPT_DOUBLE_QUOTES = 0x02;
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::empty()
    }
}

impl ScanOptions {
    /// Returns `true` if `byte` opens a quoted span under these options.
    #[inline]
    pub fn accepts_quote(self, byte: u8) -> bool {
        match byte {
            b'"' => self.contains(Self::ACCEPT_DOUBLE_QUOTES),
            b'\'' => self.contains(Self::ACCEPT_SINGLE_QUOTES),
            _ => false,
        }
    }
}
