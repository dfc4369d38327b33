// ============================================================================
// Basic Usage Example
// ============================================================================
//
// Run with trace output:
//   cargo run --example basic_usage --features logging
// ============================================================================

use decimal_calculator::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    decimal_calculator::utils::init_logging(tracing::Level::TRACE)?;

    println!("=== Decimal Calculator Example ===\n");

    // Create one engine per backend; results are identical
    for kind in BackendKind::ALL {
        let engine = CalculatorEngineBuilder::new()
            .backend(kind)
            .with_division_scale(16)
            .build()?;

        println!("--- {} backend ---", engine.backend_name());
        println!("  0.1 + 0.2        = {}", engine.add("0.1", "0.2")?);
        println!("  100 * 0.0029     = {}", engine.multiply("100", 0.0029)?);
        println!("  181 / 17         = {}", engine.divide(181, 17)?);
        println!("  -13 mod 5        = {}", engine.modulus("-13", 5)?);
        println!("  share(10, 2, 4)  = {}", engine.share(10, 2, 4)?);
        println!("  ceil(-1.2)       = {}", engine.ceil("-1.2")?);
        println!("  floor(-2.7)      = {}", engine.floor("-2.7")?);
        println!("  compare(1.0, 1)  = {:?}", engine.compare("1.0", 1)?);
        println!();
    }

    // Rounding modes on a tie
    println!("=== Rounding -2.5 ===");
    let engine = create_from_config(CalculatorConfig::default())?;
    for mode in RoundingMode::ALL {
        println!("  {:<24} {}", mode.to_string(), engine.round("-2.5", mode)?);
    }

    // Errors are returned, never panicked
    println!("\n=== Errors ===");
    if let Err(err) = engine.divide(1, "-0.0") {
        println!("  divide(1, -0.0): {}", err);
    }
    if let Err(err) = engine.add("1e3", 1) {
        println!("  add(1e3, 1): {}", err);
    }

    Ok(())
}
