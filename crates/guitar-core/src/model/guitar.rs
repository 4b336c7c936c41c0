use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::model::ids::GuitarId;
use crate::model::spec::{validate_num_strings, validate_price, GuitarSpec};
use crate::registry::Ledger;

/// A guitar minted by a [`Registry`](crate::Registry).
///
/// String count and price are validated on every assignment, and the id is
/// fixed for the life of the record. Cloning mints a new guitar with the
/// same fields and a fresh id; dropping one decrements the live count of the
/// registry that minted it.
#[derive(Debug, Serialize)]
pub struct Guitar {
    id: GuitarId,
    brand: String,
    model: String,

    #[serde(rename = "strings")]
    num_strings: u32,

    price: f64,

    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,

    #[serde(skip)]
    ledger: Rc<Ledger>,
}

impl Guitar {
    /// Mint a guitar from a spec the caller has already validated.
    pub(crate) fn from_validated(ledger: &Rc<Ledger>, spec: GuitarSpec) -> Self {
        let now = Utc::now();
        Self {
            id: ledger.mint(),
            brand: spec.brand,
            model: spec.model,
            num_strings: spec.strings,
            price: spec.price,
            created_at: now,
            updated_at: now,
            ledger: Rc::clone(ledger),
        }
    }

    pub fn id(&self) -> GuitarId {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn num_strings(&self) -> u32 {
        self.num_strings
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When a field was last changed. Failed mutations leave it alone.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// The user-supplied fields, detached from this guitar's identity.
    #[must_use]
    pub fn spec(&self) -> GuitarSpec {
        GuitarSpec {
            brand: self.brand.clone(),
            model: self.model.clone(),
            strings: self.num_strings,
            price: self.price,
        }
    }

    /// Live guitars in the registry that minted this one, this one included.
    pub fn live_count(&self) -> usize {
        self.ledger.live()
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
        self.touch();
    }

    pub fn set_model(&mut self, model: impl Into<String>) {
        self.model = model.into();
        self.touch();
    }

    pub fn set_num_strings(&mut self, n: u32) -> Result<()> {
        self.num_strings = validate_num_strings(n)?;
        self.touch();
        Ok(())
    }

    pub fn set_price(&mut self, p: f64) -> Result<()> {
        self.price = validate_price(p)?;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Clone for Guitar {
    fn clone(&self) -> Self {
        Self::from_validated(&self.ledger, self.spec())
    }
}

impl Drop for Guitar {
    fn drop(&mut self) {
        self.ledger.release(self.id);
    }
}

impl fmt::Display for Guitar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guitar[id={}, brand={}, model={}, strings={}, price={}]",
            self.id, self.brand, self.model, self.num_strings, self.price
        )
    }
}
