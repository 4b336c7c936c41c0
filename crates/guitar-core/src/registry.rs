//! The factory that mints guitars and keeps their lifecycle accounting.
//!
//! A [`Registry`] owns a ledger holding two counters: the next id to hand
//! out and the number of guitars currently alive. Every guitar keeps a
//! shared handle to the ledger of the registry that minted it, so dropping a
//! guitar decrements the live count even if the registry is gone by then.
//!
//! The ledger is built from `Rc` and `Cell`, so neither registries nor
//! guitars can cross threads.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::Result;
use crate::model::{
    validate_num_strings, validate_price, Guitar, GuitarId, GuitarSpec, DEFAULT_PRICE,
    DEFAULT_STRINGS,
};

const FIRST_ID: GuitarId = GuitarId::from_raw(1);

#[derive(Debug)]
pub(crate) struct Ledger {
    next_id: Cell<GuitarId>,
    live: Cell<usize>,
}

impl Ledger {
    fn new() -> Self {
        Self {
            next_id: Cell::new(FIRST_ID),
            live: Cell::new(0),
        }
    }

    /// Allocate the next id and count one more live guitar.
    pub(crate) fn mint(&self) -> GuitarId {
        let id = self.next_id.get();
        self.next_id.set(id.next());
        self.live.set(self.live.get() + 1);
        log::debug!("Minted guitar {} ({} live)", id, self.live.get());
        id
    }

    pub(crate) fn release(&self, id: GuitarId) {
        self.live.set(self.live.get().saturating_sub(1));
        log::debug!("Released guitar {} ({} live)", id, self.live.get());
    }

    pub(crate) fn live(&self) -> usize {
        self.live.get()
    }
}

/// Mints guitars, assigns their ids, and counts the live ones.
///
/// Two registries never share ids or counts.
#[derive(Debug)]
pub struct Registry {
    ledger: Rc<Ledger>,
    default_strings: u32,
    default_price: f64,
}

impl Registry {
    /// A registry whose defaulted guitars get 6 strings and a price of 100.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ledger: Rc::new(Ledger::new()),
            default_strings: DEFAULT_STRINGS,
            default_price: DEFAULT_PRICE,
        }
    }

    /// A registry with custom defaults for [`create_default`](Self::create_default).
    ///
    /// The defaults are held to the same rules as any other value.
    pub fn with_defaults(strings: u32, price: f64) -> Result<Self> {
        let strings = validate_num_strings(strings)?;
        let price = validate_price(price)?;
        Ok(Self {
            default_strings: strings,
            default_price: price,
            ..Self::new()
        })
    }

    /// Create a guitar with every field given explicitly.
    pub fn create(
        &self,
        brand: impl Into<String>,
        model: impl Into<String>,
        strings: u32,
        price: f64,
    ) -> Result<Guitar> {
        self.create_from_spec(
            GuitarSpec::new(brand, model)
                .with_strings(strings)
                .with_price(price),
        )
    }

    /// Create a guitar using this registry's default string count and price.
    pub fn create_default(&self, brand: impl Into<String>, model: impl Into<String>) -> Guitar {
        let spec = GuitarSpec::new(brand, model)
            .with_strings(self.default_strings)
            .with_price(self.default_price);
        Guitar::from_validated(&self.ledger, spec)
    }

    /// Create a guitar from a spec. Nothing is minted if validation fails.
    pub fn create_from_spec(&self, spec: GuitarSpec) -> Result<Guitar> {
        spec.validate()?;
        Ok(Guitar::from_validated(&self.ledger, spec))
    }

    /// Number of guitars minted by this registry that are still alive.
    pub fn live_count(&self) -> usize {
        self.ledger.live()
    }

    /// The id the next created guitar will receive.
    pub fn next_id(&self) -> GuitarId {
        self.ledger.next_id.get()
    }

    pub fn default_strings(&self) -> u32 {
        self.default_strings
    }

    pub fn default_price(&self) -> f64 {
        self.default_price
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = Registry::new();
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.next_id(), GuitarId::from_raw(1));
        assert_eq!(registry.default_strings(), 6);
        assert_eq!(registry.default_price(), 100.0);
    }

    #[test]
    fn test_create_counts_and_advances_id() {
        let registry = Registry::new();
        let guitar = registry.create("Fender", "Stratocaster", 6, 999.99).unwrap();

        assert_eq!(guitar.id(), GuitarId::from_raw(1));
        assert_eq!(registry.live_count(), 1);
        assert_eq!(registry.next_id(), GuitarId::from_raw(2));

        drop(guitar);
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.next_id(), GuitarId::from_raw(2));
    }

    #[test]
    fn test_failed_create_mints_nothing() {
        let registry = Registry::new();
        let err = registry.create("Test", "Model", 2, 100.0).unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
        assert_eq!(registry.live_count(), 0);
        assert_eq!(registry.next_id(), GuitarId::from_raw(1));
    }

    #[test]
    fn test_with_defaults() {
        let registry = Registry::with_defaults(7, 450.0).unwrap();
        let guitar = registry.create_default("Schecter", "Hellraiser C-7");

        assert_eq!(guitar.num_strings(), 7);
        assert_eq!(guitar.price(), 450.0);
    }

    #[test]
    fn test_with_defaults_rejects_invalid_values() {
        assert!(Registry::with_defaults(3, 100.0).is_err());
        assert!(Registry::with_defaults(6, 0.0).is_err());
    }

    #[test]
    fn test_registries_are_independent() {
        let first = Registry::new();
        let second = Registry::new();

        let a = first.create_default("A", "A1");
        let b = second.create_default("B", "B1");

        assert_eq!(a.id(), b.id());
        assert_eq!(first.live_count(), 1);
        assert_eq!(second.live_count(), 1);

        drop(a);
        assert_eq!(first.live_count(), 0);
        assert_eq!(second.live_count(), 1);
    }

    #[test]
    fn test_guitar_outlives_registry() {
        let registry = Registry::new();
        let guitar = registry.create_default("Gretsch", "White Falcon");
        drop(registry);

        assert_eq!(guitar.live_count(), 1);
        let copy = guitar.clone();
        assert_eq!(copy.live_count(), 2);
    }
}
