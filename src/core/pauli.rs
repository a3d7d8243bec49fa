// src/core/pauli.rs

use super::constants::qca_constants::PALETTE;
use super::error::QcaError;
use std::fmt;

/// One of the four single-qubit Pauli operators, stored per cell as a bit pair
/// `(x, z)`.
///
/// The numeric codes (I=0, X=1, Z=2, Y=3) are a presentation contract: color
/// mapping downstream depends on exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pauli {
    /// Identity, `(0, 0)`.
    I,
    /// Bit flip, `(1, 0)`.
    X,
    /// Phase flip, `(0, 1)`.
    Z,
    /// Both, `(1, 1)`.
    Y,
}

impl Pauli {
    /// All labels in code order.
    pub const ALL: [Pauli; 4] = [Pauli::I, Pauli::X, Pauli::Z, Pauli::Y];

    /// Maps an `(x, z)` bit pair to its label. Only the parity of each input counts.
    pub fn from_bits(x: u8, z: u8) -> Self {
        match (x & 1, z & 1) {
            (0, 0) => Pauli::I,
            (1, 0) => Pauli::X,
            (0, _) => Pauli::Z,
            _ => Pauli::Y,
        }
    }

    /// The `(x, z)` bit pair of this label.
    pub fn bits(self) -> (u8, u8) {
        match self {
            Pauli::I => (0, 0),
            Pauli::X => (1, 0),
            Pauli::Z => (0, 1),
            Pauli::Y => (1, 1),
        }
    }

    /// Numeric display code.
    pub fn code(self) -> u8 {
        match self {
            Pauli::I => 0,
            Pauli::X => 1,
            Pauli::Z => 2,
            Pauli::Y => 3,
        }
    }

    /// Label for a display code, `None` above 3.
    pub fn from_code(code: u8) -> Option<Self> {
        Pauli::ALL.get(usize::from(code)).copied()
    }

    /// Single-character label.
    pub fn label(self) -> char {
        match self {
            Pauli::I => 'I',
            Pauli::X => 'X',
            Pauli::Z => 'Z',
            Pauli::Y => 'Y',
        }
    }

    /// Label for one of the characters I, X, Z, Y.
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            'I' => Some(Pauli::I),
            'X' => Some(Pauli::X),
            'Z' => Some(Pauli::Z),
            'Y' => Some(Pauli::Y),
            _ => None,
        }
    }

    /// Palette entry for this label.
    pub fn color(self) -> &'static str {
        PALETTE[usize::from(self.code())]
    }

    /// True for `I`.
    pub fn is_identity(self) -> bool {
        self == Pauli::I
    }
}

impl TryFrom<char> for Pauli {
    type Error = QcaError;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        Pauli::from_label(label).ok_or(QcaError::InvalidSymbol { symbol: label, position: None })
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
