use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SamplingError};

/// The eleven proper (rotation-only) crystallographic point groups.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ProperPointGroup {
    C1,
    C2,
    D2,
    C4,
    D4,
    C3,
    D3,
    C6,
    D6,
    T,
    O,
}

impl ProperPointGroup {
    pub const ALL: [ProperPointGroup; 11] = [
        Self::C1,
        Self::C2,
        Self::D2,
        Self::C4,
        Self::D4,
        Self::C3,
        Self::D3,
        Self::C6,
        Self::D6,
        Self::T,
        Self::O,
    ];

    /// Number of rotations in the group
    pub fn order(&self) -> usize {
        match self {
            Self::C1 => 1,
            Self::C2 => 2,
            Self::D2 | Self::C4 => 4,
            Self::C3 => 3,
            Self::D3 | Self::C6 => 6,
            Self::D4 => 8,
            Self::D6 | Self::T => 12,
            Self::O => 24,
        }
    }

    /// Hermann–Mauguin symbol
    pub fn hermann_mauguin(&self) -> &'static str {
        self.as_point_group().hermann_mauguin()
    }

    /// The same group as an entry of the full point-group table
    pub fn as_point_group(&self) -> PointGroup {
        match self {
            Self::C1 => PointGroup::C1,
            Self::C2 => PointGroup::C2,
            Self::D2 => PointGroup::D2,
            Self::C4 => PointGroup::C4,
            Self::D4 => PointGroup::D4,
            Self::C3 => PointGroup::C3,
            Self::D3 => PointGroup::D3,
            Self::C6 => PointGroup::C6,
            Self::D6 => PointGroup::D6,
            Self::T => PointGroup::T,
            Self::O => PointGroup::O,
        }
    }
}

impl fmt::Display for ProperPointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hermann_mauguin())
    }
}

/// The 32 crystallographic point groups, named by Schoenflies symbol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PointGroup {
    // Triclinic
    C1,
    Ci,
    // Monoclinic
    C2,
    Cs,
    C2h,
    // Orthorhombic
    D2,
    C2v,
    D2h,
    // Tetragonal
    C4,
    S4,
    C4h,
    D4,
    C4v,
    D2d,
    D4h,
    // Trigonal
    C3,
    S6,
    D3,
    C3v,
    D3d,
    // Hexagonal
    C6,
    C3h,
    C6h,
    D6,
    C6v,
    D3h,
    D6h,
    // Cubic
    T,
    Th,
    O,
    Td,
    Oh,
}

impl PointGroup {
    pub const ALL: [PointGroup; 32] = [
        Self::C1,
        Self::Ci,
        Self::C2,
        Self::Cs,
        Self::C2h,
        Self::D2,
        Self::C2v,
        Self::D2h,
        Self::C4,
        Self::S4,
        Self::C4h,
        Self::D4,
        Self::C4v,
        Self::D2d,
        Self::D4h,
        Self::C3,
        Self::S6,
        Self::D3,
        Self::C3v,
        Self::D3d,
        Self::C6,
        Self::C3h,
        Self::C6h,
        Self::D6,
        Self::C6v,
        Self::D3h,
        Self::D6h,
        Self::T,
        Self::Th,
        Self::O,
        Self::Td,
        Self::Oh,
    ];

    /// Short Hermann–Mauguin symbol
    pub fn hermann_mauguin(&self) -> &'static str {
        match self {
            Self::C1 => "1",
            Self::Ci => "-1",
            Self::C2 => "2",
            Self::Cs => "m",
            Self::C2h => "2/m",
            Self::D2 => "222",
            Self::C2v => "mm2",
            Self::D2h => "mmm",
            Self::C4 => "4",
            Self::S4 => "-4",
            Self::C4h => "4/m",
            Self::D4 => "422",
            Self::C4v => "4mm",
            Self::D2d => "-42m",
            Self::D4h => "4/mmm",
            Self::C3 => "3",
            Self::S6 => "-3",
            Self::D3 => "32",
            Self::C3v => "3m",
            Self::D3d => "-3m",
            Self::C6 => "6",
            Self::C3h => "-6",
            Self::C6h => "6/m",
            Self::D6 => "622",
            Self::C6v => "6mm",
            Self::D3h => "-6m2",
            Self::D6h => "6/mmm",
            Self::T => "23",
            Self::Th => "m-3",
            Self::O => "432",
            Self::Td => "-43m",
            Self::Oh => "m-3m",
        }
    }

    /// Schoenflies symbol
    pub fn schoenflies(&self) -> &'static str {
        match self {
            Self::C1 => "C1",
            Self::Ci => "Ci",
            Self::C2 => "C2",
            Self::Cs => "Cs",
            Self::C2h => "C2h",
            Self::D2 => "D2",
            Self::C2v => "C2v",
            Self::D2h => "D2h",
            Self::C4 => "C4",
            Self::S4 => "S4",
            Self::C4h => "C4h",
            Self::D4 => "D4",
            Self::C4v => "C4v",
            Self::D2d => "D2d",
            Self::D4h => "D4h",
            Self::C3 => "C3",
            Self::S6 => "S6",
            Self::D3 => "D3",
            Self::C3v => "C3v",
            Self::D3d => "D3d",
            Self::C6 => "C6",
            Self::C3h => "C3h",
            Self::C6h => "C6h",
            Self::D6 => "D6",
            Self::C6v => "C6v",
            Self::D3h => "D3h",
            Self::D6h => "D6h",
            Self::T => "T",
            Self::Th => "Th",
            Self::O => "O",
            Self::Td => "Td",
            Self::Oh => "Oh",
        }
    }

    /// Whether the group contains only rotations
    pub fn is_proper(&self) -> bool {
        self.proper_subgroup().as_point_group() == *self
    }

    /// The subgroup of pure rotations, which is what orientation sampling uses
    pub fn proper_subgroup(&self) -> ProperPointGroup {
        match self {
            Self::C1 | Self::Ci | Self::Cs => ProperPointGroup::C1,
            Self::C2 | Self::C2h | Self::C2v | Self::S4 => ProperPointGroup::C2,
            Self::D2 | Self::D2h | Self::D2d => ProperPointGroup::D2,
            Self::C4 | Self::C4h | Self::C4v => ProperPointGroup::C4,
            Self::D4 | Self::D4h => ProperPointGroup::D4,
            Self::C3 | Self::S6 | Self::C3v | Self::C3h => ProperPointGroup::C3,
            Self::D3 | Self::D3d | Self::D3h => ProperPointGroup::D3,
            Self::C6 | Self::C6h | Self::C6v => ProperPointGroup::C6,
            Self::D6 | Self::D6h => ProperPointGroup::D6,
            Self::T | Self::Th | Self::Td => ProperPointGroup::T,
            Self::O | Self::Oh => ProperPointGroup::O,
        }
    }

    /// Point group of a space group given by its International Tables number (1–230)
    pub fn from_space_group(number: u16) -> Result<Self> {
        let group = match number {
            1 => Self::C1,
            2 => Self::Ci,
            3..=5 => Self::C2,
            6..=9 => Self::Cs,
            10..=15 => Self::C2h,
            16..=24 => Self::D2,
            25..=46 => Self::C2v,
            47..=74 => Self::D2h,
            75..=80 => Self::C4,
            81..=82 => Self::S4,
            83..=88 => Self::C4h,
            89..=98 => Self::D4,
            99..=110 => Self::C4v,
            111..=122 => Self::D2d,
            123..=142 => Self::D4h,
            143..=146 => Self::C3,
            147..=148 => Self::S6,
            149..=155 => Self::D3,
            156..=161 => Self::C3v,
            162..=167 => Self::D3d,
            168..=173 => Self::C6,
            174 => Self::C3h,
            175..=176 => Self::C6h,
            177..=182 => Self::D6,
            183..=186 => Self::C6v,
            187..=190 => Self::D3h,
            191..=194 => Self::D6h,
            195..=199 => Self::T,
            200..=206 => Self::Th,
            207..=214 => Self::O,
            215..=220 => Self::Td,
            221..=230 => Self::Oh,
            _ => {
                return Err(SamplingError::UnresolvableSpecifier(format!(
                    "space group {}",
                    number
                )))
            }
        };
        Ok(group)
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hermann_mauguin())
    }
}

impl FromStr for PointGroup {
    type Err = SamplingError;

    /// Accepts Hermann–Mauguin ("m-3m", "6/mmm") or Schoenflies ("Oh", "D6h") symbols
    fn from_str(s: &str) -> Result<Self> {
        let symbol = s.trim();
        // Common alternative spellings
        let symbol = match symbol {
            "m3m" => "m-3m",
            "m3" => "m-3",
            "-3m1" | "-31m" => "-3m",
            "321" | "312" => "32",
            "3m1" | "31m" => "3m",
            "-62m" => "-6m2",
            "-4m2" => "-42m",
            "C3i" => "S6",
            "S2" => "Ci",
            "C1h" => "Cs",
            "V" => "D2",
            "Vh" => "D2h",
            "Vd" => "D2d",
            other => other,
        };

        Self::ALL
            .iter()
            .copied()
            .find(|group| group.hermann_mauguin() == symbol || group.schoenflies() == symbol)
            .ok_or_else(|| SamplingError::UnresolvableSpecifier(s.to_string()))
    }
}
