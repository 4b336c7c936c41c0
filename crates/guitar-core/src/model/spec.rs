use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fewest strings a guitar may have.
pub const MIN_STRINGS: u32 = 4;

/// Most strings a guitar may have.
pub const MAX_STRINGS: u32 = 12;

/// String count used when a guitar is created from brand and model only.
pub const DEFAULT_STRINGS: u32 = 6;

/// Price used when a guitar is created from brand and model only.
pub const DEFAULT_PRICE: f64 = 100.0;

/// Check that a string count lies in `MIN_STRINGS..=MAX_STRINGS`.
pub fn validate_num_strings(n: u32) -> Result<u32> {
    if (MIN_STRINGS..=MAX_STRINGS).contains(&n) {
        Ok(n)
    } else {
        Err(Error::invalid_argument(format!(
            "string count must be between {} and {} (got {})",
            MIN_STRINGS, MAX_STRINGS, n
        )))
    }
}

/// Check that a price is strictly positive. NaN is rejected.
pub fn validate_price(p: f64) -> Result<f64> {
    if p.is_nan() || p <= 0.0 {
        Err(Error::invalid_argument(format!(
            "price must be greater than 0 (got {})",
            p
        )))
    } else {
        Ok(p)
    }
}

/// The user-supplied fields of a guitar, without identity.
///
/// A spec is inert: it is not counted by any registry and may hold
/// out-of-range values until it is handed to
/// [`Registry::create_from_spec`](crate::Registry::create_from_spec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuitarSpec {
    pub brand: String,
    pub model: String,

    #[serde(default = "default_strings")]
    pub strings: u32,

    #[serde(default = "default_price")]
    pub price: f64,
}

impl GuitarSpec {
    /// A spec with the default string count and price.
    #[must_use]
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            strings: DEFAULT_STRINGS,
            price: DEFAULT_PRICE,
        }
    }

    #[must_use]
    pub fn with_strings(mut self, strings: u32) -> Self {
        self.strings = strings;
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Validate the bounded fields. String count is checked first.
    pub fn validate(&self) -> Result<()> {
        validate_num_strings(self.strings)?;
        validate_price(self.price)?;
        Ok(())
    }
}

const fn default_strings() -> u32 {
    DEFAULT_STRINGS
}

const fn default_price() -> f64 {
    DEFAULT_PRICE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_num_strings_accepts_whole_range() {
        for n in MIN_STRINGS..=MAX_STRINGS {
            assert_eq!(validate_num_strings(n), Ok(n));
        }
    }

    #[test]
    fn test_validate_num_strings_rejects_out_of_range() {
        for n in [0, 2, 3, 13, 15, u32::MAX] {
            let err = validate_num_strings(n).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument(_)));
            assert!(err.message().contains("between 4 and 12"));
        }
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(0.01), Ok(0.01));
        assert_eq!(validate_price(2999.0), Ok(2999.0));
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-0.0).is_err());
        assert!(validate_price(-50.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_spec_builder() {
        let spec = GuitarSpec::new("Gibson", "Les Paul")
            .with_strings(7)
            .with_price(1499.0);

        assert_eq!(spec.brand, "Gibson");
        assert_eq!(spec.model, "Les Paul");
        assert_eq!(spec.strings, 7);
        assert_eq!(spec.price, 1499.0);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_spec_defaults() {
        let spec = GuitarSpec::new("Gibson", "Les Paul");
        assert_eq!(spec.strings, DEFAULT_STRINGS);
        assert_eq!(spec.price, DEFAULT_PRICE);
    }

    #[test]
    fn test_spec_validate_reports_strings_before_price() {
        let spec = GuitarSpec::new("Test", "Model")
            .with_strings(2)
            .with_price(-1.0);
        let err = spec.validate().unwrap_err();
        assert!(err.message().starts_with("string count"));
    }

    #[test]
    fn test_spec_deserialize_fills_defaults() {
        let spec: GuitarSpec =
            serde_json::from_str(r#"{"brand": "Martin", "model": "D-28"}"#).unwrap();
        assert_eq!(spec, GuitarSpec::new("Martin", "D-28"));
    }
}
