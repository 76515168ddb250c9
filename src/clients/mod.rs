pub mod label_client;
pub mod pharmacy_client;
pub mod recall_client;
