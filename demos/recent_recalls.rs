use medfinder::{Medfinder, MedfinderError};

#[tokio::main]
async fn main() -> Result<(), MedfinderError> {
    let client = Medfinder::new()?;

    let recalls = client.recalls().recent().limit(5).call().await?;

    for recall in &recalls {
        println!(
            "[{}] {} - {}",
            recall.classification.as_deref().unwrap_or("Unclassified"),
            recall
                .initiation_date()
                .map(|d| d.to_string())
                .unwrap_or_else(|| "unknown date".to_string()),
            recall
                .product_description
                .as_deref()
                .unwrap_or("(no description)")
        );
        if let Some(reason) = &recall.reason_for_recall {
            println!("    {}", reason);
        }
    }

    Ok(())
}
