//! Input keys accepted by the game engine

use std::fmt;
use std::str::FromStr;

/// A key press delivered to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A letter key; the engine ignores anything outside A-Z
    Letter(char),
    Backspace,
    Enter,
}

impl Key {
    /// Build a letter key from a character, normalizing to uppercase
    ///
    /// Returns `None` for anything that is not an ASCII letter.
    #[must_use]
    pub fn letter(c: char) -> Option<Self> {
        c.is_ascii_alphabetic()
            .then(|| Self::Letter(c.to_ascii_uppercase()))
    }

    /// The uppercase letter carried by this key, if it is a valid letter key
    #[must_use]
    pub fn as_letter(self) -> Option<char> {
        match self {
            Self::Letter(c) if c.is_ascii_alphabetic() => Some(c.to_ascii_uppercase()),
            _ => None,
        }
    }
}

impl FromStr for Key {
    type Err = String;

    /// Parse `"A"`..`"Z"` (any case), `"BACKSPACE"` or `"ENTER"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "BACKSPACE" => Ok(Self::Backspace),
            "ENTER" => Ok(Self::Enter),
            _ => {
                let mut chars = trimmed.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::letter(c).ok_or_else(|| format!("Invalid key: {s}")),
                    _ => Err(format!("Invalid key: {s}")),
                }
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Backspace => write!(f, "BACKSPACE"),
            Self::Enter => write!(f, "ENTER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_named_keys() {
        assert_eq!("ENTER".parse::<Key>(), Ok(Key::Enter));
        assert_eq!("backspace".parse::<Key>(), Ok(Key::Backspace));
    }

    #[test]
    fn parse_letters_uppercases() {
        assert_eq!("a".parse::<Key>(), Ok(Key::Letter('A')));
        assert_eq!("Z".parse::<Key>(), Ok(Key::Letter('Z')));
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert!("".parse::<Key>().is_err());
        assert!("1".parse::<Key>().is_err());
        assert!("AB".parse::<Key>().is_err());
        assert!("ESC".parse::<Key>().is_err());
    }

    #[test]
    fn letter_constructor() {
        assert_eq!(Key::letter('q'), Some(Key::Letter('Q')));
        assert_eq!(Key::letter('7'), None);
        assert_eq!(Key::letter('ß'), None);
    }

    #[test]
    fn as_letter_filters_invalid_variants() {
        assert_eq!(Key::Letter('x').as_letter(), Some('X'));
        assert_eq!(Key::Letter('#').as_letter(), None);
        assert_eq!(Key::Enter.as_letter(), None);
    }

    #[test]
    fn display_round_trips_through_parse() {
        for key in [Key::Enter, Key::Backspace, Key::Letter('K')] {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
    }
}
