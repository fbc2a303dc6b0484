use crate::models::FareDataset;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Loads the fare dataset served by `/api/fares`. A missing or broken file
/// leaves the endpoint answering with empty lists.
pub async fn load_data(path: &Path) -> FareDataset {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<FareDataset>(&bytes) {
            Ok(data) => {
                info!(records = data.records.len(), "loaded fare dataset from {}", path.display());
                data
            }
            Err(err) => {
                error!("failed to parse fare dataset: {err}");
                FareDataset::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("no fare dataset at {}, serving empty results", path.display());
            FareDataset::default()
        }
        Err(err) => {
            error!("failed to read fare dataset: {err}");
            FareDataset::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("amadeus_analytics_{}_{name}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_is_empty_dataset() {
        let data = load_data(&temp_path("does_not_exist")).await;
        assert!(data.records.is_empty());
    }

    #[tokio::test]
    async fn broken_file_is_empty_dataset() {
        let path = temp_path("broken");
        fs::write(&path, b"{ not json").await.unwrap();
        let data = load_data(&path).await;
        let _ = fs::remove_file(&path).await;
        assert!(data.records.is_empty());
    }

    #[tokio::test]
    async fn reads_records() {
        let path = temp_path("records");
        let payload = serde_json::json!({
            "records": [{
                "search_id": "s1",
                "ond": "PAR-LIS",
                "trip_type": "RT",
                "search_date": "2022-03-02",
                "advance_purchase": 10,
                "airline": "AF",
                "price": 120.0
            }]
        });
        fs::write(&path, serde_json::to_vec(&payload).unwrap()).await.unwrap();
        let data = load_data(&path).await;
        let _ = fs::remove_file(&path).await;
        assert_eq!(data.records.len(), 1);
        assert_eq!(data.records[0].airline, "AF");
    }
}
