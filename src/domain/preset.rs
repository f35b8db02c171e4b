// ============================================================================
// Alphabet Presets
// Named, statically mapped alphabet factories
// ============================================================================

use super::alphabet::{RadixAlphabet, RadixAlphabetBuilder};
use crate::numeric::RadixError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DECIMAL_DIGITS: &str = "0123456789";
const DOZENAL_SEPARATOR: &str = ";";

/// Symbols removed from base57 because they are easily mistaken for one another
const BASE57_AMBIGUOUS: [char; 5] = ['I', 'l', '1', 'O', '0'];

/// Built-in alphabet presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Preset {
    /// Digits 0 and 1
    Bin,
    /// Digits 0-7
    Oct,
    /// Digits 0-9A-F
    Hex,
    /// Digits 0-9a-f
    HexLc,
    /// Andrews notation, advocated by Frank Emerson Andrews: X and E for 10 and 11
    Dozenal,
    /// Pitman notation, advocated by Isaac Pitman: ↊ and ↋ for 10 and 11
    DozenalPitman,
    /// ASCII Pitman notation: T and E for 10 and 11
    DozenalPitmanAscii,
    /// Dwiggins notation, advocated by William Addison Dwiggins: 𝒳 and ℰ
    DozenalDwiggins,
    /// Kramer notation, advocated by Edna Kramer: * and # for 10 and 11
    DozenalKramer,
    /// Hexadecimal-style extension: A and B for 10 and 11
    DozenalAb,
    /// Digits 0-9A-Za-z
    Base62,
    /// Digits A-Za-z2-9 without I, l, 1, O and 0
    Base57,
}

impl Preset {
    /// Every preset, in CLI listing order.
    pub const ALL: [Preset; 12] = [
        Preset::Bin,
        Preset::Oct,
        Preset::Hex,
        Preset::HexLc,
        Preset::Dozenal,
        Preset::DozenalPitman,
        Preset::DozenalPitmanAscii,
        Preset::DozenalDwiggins,
        Preset::DozenalKramer,
        Preset::DozenalAb,
        Preset::Base62,
        Preset::Base57,
    ];

    /// Canonical name, as accepted by `FromStr` and the CLI.
    pub const fn name(self) -> &'static str {
        match self {
            Preset::Bin => "bin",
            Preset::Oct => "oct",
            Preset::Hex => "hex",
            Preset::HexLc => "hex_lc",
            Preset::Dozenal => "dozenal",
            Preset::DozenalPitman => "dozenal_pitman",
            Preset::DozenalPitmanAscii => "dozenal_pitman_ascii",
            Preset::DozenalDwiggins => "dozenal_dwiggins",
            Preset::DozenalKramer => "dozenal_kramer",
            Preset::DozenalAb => "dozenal_ab",
            Preset::Base62 => "base62",
            Preset::Base57 => "base57",
        }
    }

    /// Builder pre-filled with this preset's symbols, ready for overrides.
    pub fn builder(self) -> RadixAlphabetBuilder {
        match self {
            Preset::Bin => RadixAlphabetBuilder::new("01"),
            Preset::Oct => RadixAlphabetBuilder::new(&DECIMAL_DIGITS[..8]),
            Preset::Hex => RadixAlphabetBuilder::new("0123456789ABCDEF"),
            Preset::HexLc => RadixAlphabetBuilder::new("0123456789abcdef"),
            Preset::Dozenal => dozenal("XE"),
            Preset::DozenalPitman => dozenal("↊↋"),
            Preset::DozenalPitmanAscii => dozenal("TE"),
            Preset::DozenalDwiggins => dozenal("𝒳ℰ"),
            Preset::DozenalKramer => dozenal("*#"),
            Preset::DozenalAb => dozenal("AB"),
            Preset::Base62 => RadixAlphabetBuilder::new(super::alphabet::SYMBOL_POOL),
            Preset::Base57 => {
                let digits: String = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
                    .chars()
                    .filter(|c| !BASE57_AMBIGUOUS.contains(c))
                    .collect();
                RadixAlphabetBuilder::new(&digits)
            },
        }
    }

    /// The preset alphabet with default symbols.
    pub fn alphabet(self) -> RadixAlphabet {
        tracing::trace!(preset = self.name(), "building preset alphabet");
        self.builder().assemble()
    }
}

fn dozenal(ten_eleven: &str) -> RadixAlphabetBuilder {
    RadixAlphabetBuilder::new(&format!("{}{}", DECIMAL_DIGITS, ten_eleven)).separator(DOZENAL_SEPARATOR)
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = RadixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let preset = match normalized.as_str() {
            "binary" => Preset::Bin,
            "octal" => Preset::Oct,
            "hex_upper" => Preset::Hex,
            "hex_lower" => Preset::HexLc,
            "andrews" | "dozenal_andrews" => Preset::Dozenal,
            name => Preset::ALL
                .into_iter()
                .find(|preset| preset.name() == name)
                .ok_or_else(|| RadixError::UnknownPreset(s.to_string()))?,
        };
        Ok(preset)
    }
}

// ============================================================================
// Preset Constructors
// ============================================================================

impl RadixAlphabet {
    /// Binary radix: digits 0 and 1.
    pub fn bin() -> Self {
        Preset::Bin.alphabet()
    }

    /// Octal radix: digits 0-7.
    pub fn oct() -> Self {
        Preset::Oct.alphabet()
    }

    /// Uppercase hexadecimal radix.
    pub fn hex() -> Self {
        Preset::Hex.alphabet()
    }

    /// Lowercase hexadecimal radix. The exponent marker is `^`.
    pub fn hex_lc() -> Self {
        Preset::HexLc.alphabet()
    }

    /// Andrews notation dozenal radix with `;` as separator.
    pub fn dozenal() -> Self {
        Preset::Dozenal.alphabet()
    }

    pub fn dozenal_pitman() -> Self {
        Preset::DozenalPitman.alphabet()
    }

    pub fn dozenal_pitman_ascii() -> Self {
        Preset::DozenalPitmanAscii.alphabet()
    }

    pub fn dozenal_dwiggins() -> Self {
        Preset::DozenalDwiggins.alphabet()
    }

    pub fn dozenal_kramer() -> Self {
        Preset::DozenalKramer.alphabet()
    }

    pub fn dozenal_ab() -> Self {
        Preset::DozenalAb.alphabet()
    }

    /// Base62 radix: digits 0-9A-Za-z.
    pub fn base62() -> Self {
        Preset::Base62.alphabet()
    }

    /// Base57 radix: alphanumerics without I, l, 1, O and 0.
    pub fn base57() -> Self {
        Preset::Base57.alphabet()
    }
}
