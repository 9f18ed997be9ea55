//! Height and weight unit conversion with plausibility bounds.

use std::ops::RangeInclusive;

pub const CM_PER_INCH: f64 = 2.54;
pub const CM_PER_FOOT: f64 = 30.48;
pub const KG_PER_POUND: f64 = 0.453_592;

/// Heights outside this range are treated as misreads.
pub const HEIGHT_RANGE_CM: RangeInclusive<f64> = 50.0..=300.0;
/// Weights outside this range are treated as misreads.
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 20.0..=300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Centimeters,
    Meters,
    Feet,
}

impl LengthUnit {
    /// Recognize a unit token as written in a prompt (`cm`, `metres`, `ft`, `'`).
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        match token.as_str() {
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(Self::Centimeters)
            }
            "m" | "meter" | "meters" | "metre" | "metres" => Some(Self::Meters),
            "ft" | "feet" | "foot" | "'" => Some(Self::Feet),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    Kilograms,
    Pounds,
}

impl MassUnit {
    /// Recognize a unit token (`kg`, `kgs`, `kilos`, `lbs`, `pounds`).
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        if token.starts_with("lb") || token.starts_with("pound") {
            Some(Self::Pounds)
        } else if token.starts_with("kg") || token.starts_with("kilo") {
            Some(Self::Kilograms)
        } else {
            None
        }
    }
}

/// Convert a height to whole centimeters.
///
/// `inches` is added only for [`LengthUnit::Feet`] and must be below 12.
/// Decimal feet (`5.5ft`) work without it. Returns `None` when the result
/// falls outside [`HEIGHT_RANGE_CM`].
pub fn height_to_cm(value: f64, unit: LengthUnit, inches: Option<f64>) -> Option<u32> {
    let cm = match unit {
        LengthUnit::Centimeters => value,
        LengthUnit::Meters => value * 100.0,
        LengthUnit::Feet => {
            let inches = inches.unwrap_or(0.0);
            if !(0.0..12.0).contains(&inches) {
                return None;
            }
            value * CM_PER_FOOT + inches * CM_PER_INCH
        }
    };
    if !cm.is_finite() || !HEIGHT_RANGE_CM.contains(&cm) {
        return None;
    }
    Some(cm.round() as u32)
}

/// Convert a weight to kilograms rounded to one decimal.
///
/// Returns `None` when the result falls outside [`WEIGHT_RANGE_KG`].
pub fn weight_to_kg(value: f64, unit: MassUnit) -> Option<f64> {
    let kg = match unit {
        MassUnit::Kilograms => value,
        MassUnit::Pounds => value * KG_PER_POUND,
    };
    if !kg.is_finite() || !WEIGHT_RANGE_KG.contains(&kg) {
        return None;
    }
    Some((kg * 10.0).round() / 10.0)
}
