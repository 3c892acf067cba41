//! Unit conversion for transform arguments
//!
//! Absolute lengths resolve to pixels and angles resolve to degrees. Derived
//! units are expressed through the unit they are defined by (`mm` through `cm`
//! through `in`), so results match the CSS Values reference ratios exactly.
//!
//! Conversion looks tags up exactly as written (`1IN` is an unknown unit).
//! Parameter type checks use [`LengthUnit::is_known`] and
//! [`AngleUnit::is_known`], which ignore case.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use super::types::TransformError;

/// Absolute length units (CSS Values 4, section 6.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    Cm,
    Mm,
    Q,
    In,
    Pc,
    Pt,
    Px,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 7] = [
        LengthUnit::Cm,
        LengthUnit::Mm,
        LengthUnit::Q,
        LengthUnit::In,
        LengthUnit::Pc,
        LengthUnit::Pt,
        LengthUnit::Px,
    ];

    /// Lowercase unit tag as written in CSS.
    pub fn as_str(self) -> &'static str {
        match self {
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::Q => "q",
            LengthUnit::In => "in",
            LengthUnit::Pc => "pc",
            LengthUnit::Pt => "pt",
            LengthUnit::Px => "px",
        }
    }

    /// Whether `tag` names a length unit, ignoring ASCII case.
    pub fn is_known(tag: &str) -> bool {
        LengthUnit::ALL.iter().any(|unit| unit.as_str().eq_ignore_ascii_case(tag))
    }

    /// Convert a magnitude in this unit to pixels.
    pub fn to_px(self, x: f64) -> f64 {
        match self {
            LengthUnit::Cm => LengthUnit::In.to_px(x) / 2.54,
            LengthUnit::Mm => LengthUnit::Cm.to_px(x) / 10.0,
            LengthUnit::Q => LengthUnit::Cm.to_px(x) / 40.0,
            LengthUnit::In => x * 96.0,
            LengthUnit::Pc => LengthUnit::In.to_px(x) / 6.0,
            LengthUnit::Pt => LengthUnit::In.to_px(x) / 72.0,
            LengthUnit::Px => x,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LengthUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| TransformError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Angle units (CSS Values 4, section 7.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Deg,
    Grad,
    Rad,
    Turn,
}

impl AngleUnit {
    pub const ALL: [AngleUnit; 4] = [AngleUnit::Deg, AngleUnit::Grad, AngleUnit::Rad, AngleUnit::Turn];

    pub fn as_str(self) -> &'static str {
        match self {
            AngleUnit::Deg => "deg",
            AngleUnit::Grad => "grad",
            AngleUnit::Rad => "rad",
            AngleUnit::Turn => "turn",
        }
    }

    pub fn is_known(tag: &str) -> bool {
        AngleUnit::ALL.iter().any(|unit| unit.as_str().eq_ignore_ascii_case(tag))
    }

    /// Convert a magnitude in this unit to degrees.
    pub fn to_deg(self, x: f64) -> f64 {
        match self {
            AngleUnit::Deg => x,
            AngleUnit::Grad => AngleUnit::Turn.to_deg(x) / 400.0,
            AngleUnit::Rad => x * (180.0 / PI),
            AngleUnit::Turn => x * 360.0,
        }
    }
}

impl FromStr for AngleUnit {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AngleUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| TransformError::UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit tag resolved against both conversion tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Length(LengthUnit),
    Angle(AngleUnit),
}

impl Unit {
    /// Look a unit tag up in the length table, then the angle table.
    pub fn parse(tag: &str) -> Result<Unit, TransformError> {
        if let Ok(unit) = tag.parse::<LengthUnit>() {
            return Ok(Unit::Length(unit));
        }
        if let Ok(unit) = tag.parse::<AngleUnit>() {
            return Ok(Unit::Angle(unit));
        }
        Err(TransformError::UnknownUnit(tag.to_string()))
    }

    /// Convert to the canonical unit of this unit's table (px or deg).
    pub fn to_canonical(self, x: f64) -> f64 {
        match self {
            Unit::Length(unit) => unit.to_px(x),
            Unit::Angle(unit) => unit.to_deg(x),
        }
    }
}

/// Convert `value` expressed in `unit` to pixels or degrees.
pub fn convert(value: f64, unit: &str) -> Result<f64, TransformError> {
    Ok(Unit::parse(unit)?.to_canonical(value))
}
