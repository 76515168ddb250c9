use medfinder::{Medfinder, MedfinderError};

#[tokio::main]
async fn main() -> Result<(), MedfinderError> {
    let client = Medfinder::new()?;

    let summary = client.drug().summary("Ibuprofen").call().await?;

    println!("Brand name:   {}", summary.brand_name);
    println!("Generic name: {}", summary.generic_name);
    println!("Purpose:      {}", summary.purpose);
    println!("Warnings:     {}", summary.warnings);
    println!("Side effects: {}", summary.side_effects);
    println!("Dosage:       {}", summary.dosage);

    Ok(())
}
