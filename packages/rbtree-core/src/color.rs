#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Node color. Only `Red` and `Black` survive in trees handed back to callers;
/// `DoubleBlack` and `NegativeBlack` exist only while a deletion is rebalancing.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    Red,
    Black,
    DoubleBlack,
    NegativeBlack,
}

impl Color {
    /// One shade darker. Saturates at `DoubleBlack`.
    pub fn blacker(self) -> Color {
        match self {
            Color::NegativeBlack => Color::Red,
            Color::Red => Color::Black,
            _ => Color::DoubleBlack,
        }
    }

    /// One shade lighter. Saturates at `NegativeBlack`.
    pub fn redder(self) -> Color {
        match self {
            Color::Black => Color::Red,
            Color::DoubleBlack => Color::Black,
            _ => Color::NegativeBlack,
        }
    }

    /// Contribution of a node of this color to a path's black count.
    pub fn black_weight(self) -> isize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
            Color::DoubleBlack => 2,
            Color::NegativeBlack => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacker_and_redder_are_inverse_between_the_extremes() {
        for color in [Color::Red, Color::Black] {
            assert_eq!(color.blacker().redder(), color);
            assert_eq!(color.redder().blacker(), color);
        }
    }

    #[test]
    fn shading_saturates() {
        assert_eq!(Color::DoubleBlack.blacker(), Color::DoubleBlack);
        assert_eq!(Color::NegativeBlack.redder(), Color::NegativeBlack);
        assert_eq!(Color::NegativeBlack.blacker(), Color::Red);
        assert_eq!(Color::DoubleBlack.redder(), Color::Black);
    }
}
