#[cfg(test)]
#[path = "../../tests/unit/checker/flags_test.rs"]
mod flags_test;

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// A constraint violation kind detected by the checker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CheckerFlag {
    /// Period count mismatch or a reference to unknown station.
    Format,
    /// Duplicate or missing vehicle dispatch within a period.
    VehicleDispatch,
    /// A station served in more than one period.
    StationOverTime,
    /// A cabin delivery exceeds the cabin volume.
    CabinOverVolume,
    /// Accumulated station delivery exceeds the demand of the current period.
    StationOverDemand,
}

impl CheckerFlag {
    /// All flags in the order they are reported.
    pub const ALL: [CheckerFlag; 5] = [
        CheckerFlag::Format,
        CheckerFlag::VehicleDispatch,
        CheckerFlag::StationOverTime,
        CheckerFlag::CabinOverVolume,
        CheckerFlag::StationOverDemand,
    ];

    /// Returns a name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            CheckerFlag::Format => "FormatError",
            CheckerFlag::VehicleDispatch => "VehicleDispatchError",
            CheckerFlag::StationOverTime => "StationOverTimeError",
            CheckerFlag::CabinOverVolume => "CabinOverVolumeError",
            CheckerFlag::StationOverDemand => "StationOverDemandError",
        }
    }

    fn bit(&self) -> u8 {
        1 << (*self as u8)
    }
}

/// Specifies how flags are packed into an integer mask at the process boundary.
///
/// Legacy values are not disjoint: `StationOverDemand` is `0x16`, which shares bits with
/// `VehicleDispatch` (`0x2`) and `StationOverTime` (`0x4`). Existing result files and tools
/// rely on these values, so `Legacy` stays the default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlagEncoding {
    /// Values used by existing tooling: `0x1, 0x2, 0x4, 0x8, 0x16`.
    #[default]
    Legacy,
    /// Powers of two: `0x1, 0x2, 0x4, 0x8, 0x10`.
    Disjoint,
}

impl FlagEncoding {
    /// Returns the integer value of the flag in this encoding.
    pub fn value(&self, flag: CheckerFlag) -> i32 {
        match (self, flag) {
            (_, CheckerFlag::Format) => 0x1,
            (_, CheckerFlag::VehicleDispatch) => 0x2,
            (_, CheckerFlag::StationOverTime) => 0x4,
            (_, CheckerFlag::CabinOverVolume) => 0x8,
            (FlagEncoding::Legacy, CheckerFlag::StationOverDemand) => 0x16,
            (FlagEncoding::Disjoint, CheckerFlag::StationOverDemand) => 0x10,
        }
    }
}

impl std::str::FromStr for FlagEncoding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "legacy" => Ok(FlagEncoding::Legacy),
            "disjoint" => Ok(FlagEncoding::Disjoint),
            _ => Err(format!("unknown flag encoding: '{value}'")),
        }
    }
}

/// A set of independently detected violations. Internally every flag has its own bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CheckerFlags(u8);

impl CheckerFlags {
    /// Returns true if no violation is recorded.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if given violation is recorded.
    pub fn contains(&self, flag: CheckerFlag) -> bool {
        self.0 & flag.bit() != 0
    }

    /// Records a violation.
    pub fn insert(&mut self, flag: CheckerFlag) {
        self.0 |= flag.bit();
    }

    /// Iterates over recorded violations.
    pub fn iter(&self) -> impl Iterator<Item = CheckerFlag> + '_ {
        CheckerFlag::ALL.into_iter().filter(move |flag| self.contains(*flag))
    }

    /// Packs flags into an integer mask using given encoding.
    pub fn to_mask(&self, encoding: FlagEncoding) -> i32 {
        self.iter().fold(0, |mask, flag| mask | encoding.value(flag))
    }

    /// Unpacks flags from an integer mask using given encoding.
    ///
    /// With the legacy encoding a flag is reported when any of its bits is present, so a mask
    /// holding `StationOverDemand` reports `VehicleDispatch` and `StationOverTime` too.
    pub fn from_mask(mask: i32, encoding: FlagEncoding) -> Self {
        CheckerFlag::ALL.into_iter().filter(|flag| mask & encoding.value(*flag) != 0).collect()
    }
}

impl From<CheckerFlag> for CheckerFlags {
    fn from(flag: CheckerFlag) -> Self {
        Self(flag.bit())
    }
}

impl FromIterator<CheckerFlag> for CheckerFlags {
    fn from_iter<T: IntoIterator<Item = CheckerFlag>>(iter: T) -> Self {
        iter.into_iter().fold(CheckerFlags::default(), |flags, flag| flags | flag)
    }
}

impl BitOr<CheckerFlag> for CheckerFlags {
    type Output = CheckerFlags;

    fn bitor(self, rhs: CheckerFlag) -> Self::Output {
        Self(self.0 | rhs.bit())
    }
}

impl BitOrAssign<CheckerFlag> for CheckerFlags {
    fn bitor_assign(&mut self, rhs: CheckerFlag) {
        self.insert(rhs);
    }
}

impl fmt::Display for CheckerFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "no errors");
        }

        write!(f, "{}", self.iter().map(|flag| flag.name()).collect::<Vec<_>>().join(", "))
    }
}
