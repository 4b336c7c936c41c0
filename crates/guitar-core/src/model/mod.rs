pub mod guitar;
pub mod ids;
pub mod spec;

pub use guitar::Guitar;
pub use ids::GuitarId;
pub use spec::{
    validate_num_strings, validate_price, GuitarSpec, DEFAULT_PRICE, DEFAULT_STRINGS,
    MAX_STRINGS, MIN_STRINGS,
};
