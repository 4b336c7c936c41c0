use anyhow::{ensure, Result};
use guitar_core::Registry;

/// Build a short list of guitars, print their summaries, then clear the list
/// and check that nothing minted by the registry is still alive.
pub fn run_demo(registry: &Registry) -> Result<()> {
    let mut guitars = vec![
        registry.create("Fender", "Telecaster", 6, 899.0)?,
        registry.create("Ibanez", "RG550", 6, 750.0)?,
        registry.create("Martin", "D-28", 6, 2999.0)?,
    ];
    log::info!("Created {} guitars", registry.live_count());

    println!("Guitar list:");
    for guitar in &guitars {
        println!("  {}", guitar);
    }

    guitars.clear();
    ensure!(
        registry.live_count() == 0,
        "{} guitars still alive after clearing the list",
        registry.live_count()
    );

    println!("\nLive guitars after clearing: {}", registry.live_count());
    Ok(())
}
