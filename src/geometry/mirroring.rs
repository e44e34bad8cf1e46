use crate::types::BoardSide;

/// Axis flags for a reflection; `x` negates X coordinates, `y` negates Y coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Mirroring {
    pub x: bool,
    pub y: bool,
}

impl Mirroring {
    pub const NONE: Mirroring = Mirroring {
        x: false,
        y: false,
    };

    /// Parts placed on the bottom side are viewed through the board, flipping X.
    pub fn for_side(side: BoardSide) -> Self {
        match side {
            BoardSide::Bottom => Self {
                x: true,
                y: false,
            },
            BoardSide::Top | BoardSide::Unknown => Self::NONE,
        }
    }

    pub fn is_none(&self) -> bool {
        !self.x && !self.y
    }

    /// `true` when exactly one axis is flipped, which reverses polygon winding.
    pub fn reverses_winding(&self) -> bool {
        self.x ^ self.y
    }

    pub fn as_f64(&self) -> [f64; 2] {
        [
            if self.x { -1.0 } else { 1.0 },
            if self.y { -1.0 } else { 1.0 },
        ]
    }
}

impl core::ops::BitXor for Mirroring {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x ^ rhs.x,
            y: self.y ^ rhs.y,
        }
    }
}

impl From<[bool; 2]> for Mirroring {
    fn from(value: [bool; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

impl From<(bool, bool)> for Mirroring {
    fn from(value: (bool, bool)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}
