use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color `{hex}`")]
pub struct InvalidHex {
    pub hex: String,
}

/// One rendered palette entry: the RGB channels of a catalog color plus the
/// upper-cased six digit hex it was parsed from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteLine {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub hex: String,
}

impl PaletteLine {
    /// Parse a catalog hex string (`RRGGBBAA`). Only the first six digits are
    /// used; the alpha pair and anything after it is ignored.
    pub fn from_hex(hex: &str) -> Result<Self, InvalidHex> {
        let invalid = || InvalidHex {
            hex: hex.to_string(),
        };
        let rgb = hex.get(0..6).ok_or_else(invalid)?;
        // from_str_radix tolerates a leading sign, so check digits up front
        if !rgb.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |at: usize| u8::from_str_radix(&rgb[at..at + 2], 16).map_err(|_| invalid());

        Ok(Self {
            red: channel(0)?,
            green: channel(2)?,
            blue: channel(4)?,
            hex: rgb.to_ascii_uppercase(),
        })
    }
}

impl fmt::Display for PaletteLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:>3} {:>3}     #{}",
            self.red, self.green, self.blue, self.hex
        )
    }
}
