//! Ship catalog types and placement orientation.

use core::fmt;

use crate::config::{NUM_SHIPS, SHIPS};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Map a rotation angle from the presentation layer: 0° is horizontal,
    /// 90° is vertical. Other angles are rejected.
    pub fn from_angle(degrees: u16) -> Option<Self> {
        match degrees {
            0 => Some(Orientation::Horizontal),
            90 => Some(Orientation::Vertical),
            _ => None,
        }
    }

    /// Rotation angle in degrees.
    pub fn angle(self) -> u16 {
        match self {
            Orientation::Horizontal => 0,
            Orientation::Vertical => 90,
        }
    }

    /// The other orientation, as toggled by a flip button.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Identity of one ship in the fixed fleet, stored in board cells in place
/// of the ship's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipId(u8);

impl ShipId {
    pub const DESTROYER: ShipId = ShipId(0);
    pub const SUBMARINE: ShipId = ShipId(1);
    pub const CRUISER: ShipId = ShipId(2);
    pub const BATTLESHIP: ShipId = ShipId(3);
    pub const CARRIER: ShipId = ShipId(4);

    /// Ship at position `index` of the fleet catalog.
    pub fn new(index: usize) -> Option<Self> {
        (index < NUM_SHIPS).then(|| ShipId(index as u8))
    }

    /// Look a ship up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        SHIPS
            .iter()
            .position(|def| def.name().eq_ignore_ascii_case(name))
            .and_then(Self::new)
    }

    /// All ships in placement order.
    pub fn all() -> impl Iterator<Item = ShipId> {
        (0..NUM_SHIPS as u8).map(ShipId)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn ship_type(self) -> ShipType {
        SHIPS[self.index()]
    }

    pub fn name(self) -> &'static str {
        self.ship_type().name()
    }

    pub fn length(self) -> usize {
        self.ship_type().length()
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
