//! Amount types shared between the HTTP layer and connectors.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::errors::ParsingError;

/// Amount in the smallest unit the gateway accepts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Scale a major-unit amount by the gateway's fixed multiplier.
    pub fn from_major_units(
        amount: i64,
        multiplier: i64,
    ) -> Result<Self, error_stack::Report<ParsingError>> {
        amount
            .checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| error_stack::report!(ParsingError::IntegerOverflow))
    }

    pub fn to_minor_unit_as_string(self) -> StringMinorUnit {
        StringMinorUnit(self.0.to_string())
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

/// Minor-unit amount rendered as the string the gateway expects on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringMinorUnit(String);

impl StringMinorUnit {
    pub fn get_amount_as_string(&self) -> &str {
        &self.0
    }
}

impl Display for StringMinorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Amount convertor trait for connector
pub trait AmountConvertor: Send {
    /// Output type for the connector
    type Output;
    /// helps in conversion of connector required amount type
    fn convert(
        &self,
        amount: MinorUnit,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>>;
}

/// Connector required amount type
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct StringMinorUnitForConnector;

impl AmountConvertor for StringMinorUnitForConnector {
    type Output = StringMinorUnit;
    fn convert(
        &self,
        amount: MinorUnit,
    ) -> Result<Self::Output, error_stack::Report<ParsingError>> {
        Ok(amount.to_minor_unit_as_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn major_units_scale_by_multiplier() {
        let amount = MinorUnit::from_major_units(10_000, 100).unwrap();
        assert_eq!(amount.get_amount_as_i64(), 1_000_000);
        assert_eq!(
            amount.to_minor_unit_as_string().get_amount_as_string(),
            "1000000"
        );
    }

    #[test]
    fn major_unit_overflow_is_an_error() {
        assert!(MinorUnit::from_major_units(i64::MAX, 100).is_err());
    }

    #[test]
    fn string_minor_unit_converter_renders_integer() {
        let converted = StringMinorUnitForConnector
            .convert(MinorUnit::new(1_000_000))
            .unwrap();
        assert_eq!(converted.get_amount_as_string(), "1000000");
    }
}
