//! Layout: turning the frozen graph into positioned drawables.
//!
//! The flow [`Direction`] is a global hint honored by transforming the
//! layered layout's coordinate axes; [`Engine`](engine::Engine) computes the
//! per-scope layouts and composes them into an absolute [`Scene`](scene::Scene).

pub(crate) mod engine;
pub(crate) mod scene;

pub use engine::Engine;
pub use scene::{PlacedContainer, Scene};

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use cumulus_core::geometry::Point;

/// The dominant layout axis of the diagram.
///
/// Matches the conventional two-letter direction codes: `TB` (top to
/// bottom, the default), `BT`, `LR`, `RL`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top to bottom (default).
    #[default]
    TopBottom,
    /// Bottom to top.
    BottomTop,
    /// Left to right.
    LeftRight,
    /// Right to left.
    RightLeft,
}

impl Direction {
    /// Whether the flow axis is horizontal (`LR`/`RL`).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::LeftRight | Self::RightLeft)
    }

    /// Maps a point from raw layered-layout space (cross axis x, flow axis
    /// y, flowing downward) into diagram space.
    pub(crate) fn transform(&self, raw: Point) -> Point {
        match self {
            Self::TopBottom => raw,
            Self::BottomTop => Point::new(raw.x(), -raw.y()),
            Self::LeftRight => Point::new(raw.y(), raw.x()),
            Self::RightLeft => Point::new(-raw.y(), raw.x()),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TB" => Ok(Self::TopBottom),
            "BT" => Ok(Self::BottomTop),
            "LR" => Ok(Self::LeftRight),
            "RL" => Ok(Self::RightLeft),
            _ => Err(format!(
                "invalid flow direction `{s}`, valid values: TB, BT, LR, RL"
            )),
        }
    }
}

impl From<Direction> for &'static str {
    fn from(val: Direction) -> Self {
        match val {
            Direction::TopBottom => "TB",
            Direction::BottomTop => "BT",
            Direction::LeftRight => "LR",
            Direction::RightLeft => "RL",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
