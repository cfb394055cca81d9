use serde::{Deserialize, Serialize};

/// Turtle instruction decoded from one command-string symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `F`: move forward with the pen down.
    Forward,
    /// `f`: move forward without drawing.
    Move,
    /// `+`: turn toward increasing heading.
    TurnLeft,
    /// `-`: turn toward decreasing heading.
    TurnRight,
    /// `[`: save the cursor (bracketed symbol set only).
    Push,
    /// `]`: restore the last saved cursor (bracketed symbol set only).
    Pop,
}

/// Alphabet recognized by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSet {
    /// `F`, `f`, `+` and `-`. Every other character is ignored.
    #[default]
    Basic,
    /// `Basic` plus `[` and `]` for branching.
    Bracketed,
}

impl Command {
    /// Decodes one symbol, returning `None` for characters outside `set`.
    #[must_use]
    pub fn from_symbol(symbol: char, set: SymbolSet) -> Option<Self> {
        match (symbol, set) {
            ('F', _) => Some(Self::Forward),
            ('f', _) => Some(Self::Move),
            ('+', _) => Some(Self::TurnLeft),
            ('-', _) => Some(Self::TurnRight),
            ('[', SymbolSet::Bracketed) => Some(Self::Push),
            (']', SymbolSet::Bracketed) => Some(Self::Pop),
            _ => None,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Move => 'f',
            Self::TurnLeft => '+',
            Self::TurnRight => '-',
            Self::Push => '[',
            Self::Pop => ']',
        }
    }
}
