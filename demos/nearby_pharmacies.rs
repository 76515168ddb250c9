use medfinder::{Medfinder, MedfinderError};

#[tokio::main]
async fn main() -> Result<(), MedfinderError> {
    let client = Medfinder::new()?;

    let results = client
        .pharmacies()
        .address("Alexanderplatz, Berlin")
        .call()
        .await?;

    if results.is_empty() {
        println!("No pharmacies found nearby.");
        return Ok(());
    }

    for ranked in &results {
        println!(
            "{:>5.1} km  {}  {}",
            ranked.distance_km,
            ranked.poi.display_name(),
            ranked.poi.address().unwrap_or_default()
        );
    }

    Ok(())
}
