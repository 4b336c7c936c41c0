use anyhow::{Context, Result};
use guitar_core::{Guitar, GuitarSpec, Registry};

/// Create a single guitar and print it.
///
/// With neither `strings` nor `price` the defaulted constructor is used;
/// otherwise a missing value is taken from the registry's defaults.
pub fn run_new(
    registry: &Registry,
    brand: String,
    model: String,
    strings: Option<u32>,
    price: Option<f64>,
    json: bool,
) -> Result<()> {
    let guitar = build_guitar(registry, brand, model, strings, price)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&guitar).context("Failed to serialize guitar")?;
        println!("{}", rendered);
    } else {
        println!("{}", guitar);
    }

    Ok(())
}

fn build_guitar(
    registry: &Registry,
    brand: String,
    model: String,
    strings: Option<u32>,
    price: Option<f64>,
) -> Result<Guitar> {
    if strings.is_none() && price.is_none() {
        return Ok(registry.create_default(brand, model));
    }

    let spec = GuitarSpec::new(brand, model)
        .with_strings(strings.unwrap_or_else(|| registry.default_strings()))
        .with_price(price.unwrap_or_else(|| registry.default_price()));

    registry
        .create_from_spec(spec)
        .context("Failed to create guitar")
}
