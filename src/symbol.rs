use crate::error::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A key on a telephone keypad.
///
/// The fourth column (`A`-`D`) is rarely present on consumer handsets but is
/// part of the DTMF table, so it is accepted here as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DtmfSymbol {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Star,
    Pound,
    A,
    B,
    C,
    D,
}

impl DtmfSymbol {
    /// The twelve keys of a standard handset, in keypad order.
    pub const KEYPAD: [DtmfSymbol; 12] = [
        DtmfSymbol::One,
        DtmfSymbol::Two,
        DtmfSymbol::Three,
        DtmfSymbol::Four,
        DtmfSymbol::Five,
        DtmfSymbol::Six,
        DtmfSymbol::Seven,
        DtmfSymbol::Eight,
        DtmfSymbol::Nine,
        DtmfSymbol::Star,
        DtmfSymbol::Zero,
        DtmfSymbol::Pound,
    ];

    /// Every DTMF symbol: the handset keys followed by the `A`-`D` column.
    pub const ALL: [DtmfSymbol; 16] = [
        DtmfSymbol::One,
        DtmfSymbol::Two,
        DtmfSymbol::Three,
        DtmfSymbol::Four,
        DtmfSymbol::Five,
        DtmfSymbol::Six,
        DtmfSymbol::Seven,
        DtmfSymbol::Eight,
        DtmfSymbol::Nine,
        DtmfSymbol::Star,
        DtmfSymbol::Zero,
        DtmfSymbol::Pound,
        DtmfSymbol::A,
        DtmfSymbol::B,
        DtmfSymbol::C,
        DtmfSymbol::D,
    ];

    pub fn as_char(self) -> char {
        match self {
            DtmfSymbol::Zero => '0',
            DtmfSymbol::One => '1',
            DtmfSymbol::Two => '2',
            DtmfSymbol::Three => '3',
            DtmfSymbol::Four => '4',
            DtmfSymbol::Five => '5',
            DtmfSymbol::Six => '6',
            DtmfSymbol::Seven => '7',
            DtmfSymbol::Eight => '8',
            DtmfSymbol::Nine => '9',
            DtmfSymbol::Star => '*',
            DtmfSymbol::Pound => '#',
            DtmfSymbol::A => 'A',
            DtmfSymbol::B => 'B',
            DtmfSymbol::C => 'C',
            DtmfSymbol::D => 'D',
        }
    }
}

impl TryFrom<char> for DtmfSymbol {
    type Error = SymbolError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            '0' => Ok(DtmfSymbol::Zero),
            '1' => Ok(DtmfSymbol::One),
            '2' => Ok(DtmfSymbol::Two),
            '3' => Ok(DtmfSymbol::Three),
            '4' => Ok(DtmfSymbol::Four),
            '5' => Ok(DtmfSymbol::Five),
            '6' => Ok(DtmfSymbol::Six),
            '7' => Ok(DtmfSymbol::Seven),
            '8' => Ok(DtmfSymbol::Eight),
            '9' => Ok(DtmfSymbol::Nine),
            '*' => Ok(DtmfSymbol::Star),
            '#' => Ok(DtmfSymbol::Pound),
            'A' => Ok(DtmfSymbol::A),
            'B' => Ok(DtmfSymbol::B),
            'C' => Ok(DtmfSymbol::C),
            'D' => Ok(DtmfSymbol::D),
            other => Err(SymbolError::InvalidSymbol(other.to_string())),
        }
    }
}

impl FromStr for DtmfSymbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => DtmfSymbol::try_from(c),
            _ => Err(SymbolError::InvalidSymbol(s.to_string())),
        }
    }
}

impl TryFrom<String> for DtmfSymbol {
    type Error = SymbolError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DtmfSymbol> for String {
    fn from(symbol: DtmfSymbol) -> Self {
        symbol.as_char().to_string()
    }
}

impl fmt::Display for DtmfSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keypad_characters() {
        assert_eq!("7".parse::<DtmfSymbol>().unwrap(), DtmfSymbol::Seven);
        assert_eq!("*".parse::<DtmfSymbol>().unwrap(), DtmfSymbol::Star);
        assert_eq!(" # ".parse::<DtmfSymbol>().unwrap(), DtmfSymbol::Pound);
        assert_eq!(DtmfSymbol::try_from('b').unwrap(), DtmfSymbol::B);
    }

    #[test]
    fn rejects_non_keypad_input() {
        assert!("12".parse::<DtmfSymbol>().is_err());
        assert!("".parse::<DtmfSymbol>().is_err());
        assert_eq!(
            DtmfSymbol::try_from('x'),
            Err(SymbolError::InvalidSymbol("X".to_string()))
        );
    }

    #[test]
    fn serializes_as_key_label() {
        assert_eq!(serde_json::to_string(&DtmfSymbol::Pound).unwrap(), "\"#\"");
        let parsed: DtmfSymbol = serde_json::from_str("\"5\"").unwrap();
        assert_eq!(parsed, DtmfSymbol::Five);
        assert!(serde_json::from_str::<DtmfSymbol>("\"55\"").is_err());
    }

    #[test]
    fn display_matches_key_label() {
        let labels: String = DtmfSymbol::KEYPAD.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, "123456789*0#");
    }

    #[test]
    fn every_symbol_round_trips_through_its_label() {
        for symbol in DtmfSymbol::ALL {
            assert_eq!(symbol.to_string().parse::<DtmfSymbol>(), Ok(symbol));
        }
        for c in '0'..='9' {
            assert_eq!(DtmfSymbol::try_from(c).map(DtmfSymbol::as_char), Ok(c));
        }
    }
}
