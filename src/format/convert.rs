//! Unit conversion.
//!
//! Scaling to a smaller unit is an exact integer multiplication. Scaling to
//! a larger unit divides, and whether the remainder survives depends on the
//! [`Precision`] policy.

use std::fmt;
use std::str::FromStr;

use crate::data::Unit;
use crate::error::NumError;
use crate::format::printf::Value;

/// How conversions that divide are carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Integer when the division is exact, floating point otherwise
    #[default]
    Auto,
    /// Always integer, truncating toward zero
    Int,
    /// Always floating point
    Float,
}

impl FromStr for Precision {
    type Err = NumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Precision::Auto),
            "int" | "integer" => Ok(Precision::Int),
            "float" => Ok(Precision::Float),
            _ => Err(NumError::InvalidArgument(format!(
                "Unknown precision: '{}'. Valid values: auto, int, float",
                s
            ))),
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Auto => write!(f, "auto"),
            Precision::Int => write!(f, "int"),
            Precision::Float => write!(f, "float"),
        }
    }
}

/// Convert `value` expressed in `from` units into `to` units.
pub fn convert(value: i64, from: Unit, to: Unit, precision: Precision) -> Value {
    let value = value as i128;
    let (src, dst) = (from.multiplier(), to.multiplier());

    match precision {
        Precision::Float => Value::Float(value as f64 * src as f64 / dst as f64),
        Precision::Int => Value::Int(value * src / dst),
        // multipliers are powers of 1024, so src >= dst divides evenly
        Precision::Auto if src >= dst => Value::Int(value * (src / dst)),
        Precision::Auto => {
            let bytes = value * src;
            if bytes % dst == 0 {
                Value::Int(bytes / dst)
            } else {
                Value::Float(bytes as f64 / dst as f64)
            }
        }
    }
}
