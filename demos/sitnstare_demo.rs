//! Resolves slit coordinates for a few synthetic sit-and-stare observations.
//!
//! Run with: `RUST_LOG=info cargo run --example sitnstare_demo`

use slitxy::{resolve_raster_xy, resolve_sitnstare_xy, InMemoryObservation, RasterOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Sit-and-stare slit coordinates ===\n");

    let xcen = [-402.1, -401.8, -401.2, -400.9, -400.5];
    let ycen = [215.3, 215.6, 215.4, 215.9, 216.1];

    for roll in [0.3, 90.0, -90.0, 45.0] {
        let obs = InMemoryObservation::sit_and_stare(roll, 8, 0.1663, &xcen, &ycen);
        match resolve_sitnstare_xy(&obs, false) {
            Ok(resolution) => {
                println!("SAT_ROT = {roll} -> {} (midind {})", resolution.regime, resolution.midind);
                if let Some((x, y)) = resolution.coords.into_representative() {
                    for (i, (xi, yi)) in x.iter().zip(y.iter()).enumerate() {
                        println!("  slit[{i}]: x = {xi:9.3}, y = {yi:9.3}");
                    }
                }
            }
            Err(e) => println!("SAT_ROT = {roll} failed: {e}"),
        }
        println!();
    }

    println!("--- All exposures at 30° roll ---");
    let obs = InMemoryObservation::sit_and_stare(30.0, 4, 0.33, &xcen, &ycen);
    match resolve_sitnstare_xy(&obs, true) {
        Ok(resolution) => {
            if let Some((x, y)) = resolution.coords.into_all_times() {
                println!("xcoord shape: {:?}", x.shape());
                println!("xcoord:\n{x:.3}");
                println!("ycoord:\n{y:.3}");
            }
        }
        Err(e) => println!("failed: {e}"),
    }

    println!("\n--- Raster resolver ---");
    let obs = InMemoryObservation::sit_and_stare(0.0, 4, 0.33, &xcen, &ycen);
    if let Err(e) = resolve_raster_xy(&obs, &RasterOptions::default()) {
        println!("{e}");
    }
}
