use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};
use tokio::fs;
use tracing::error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KvStore {
    entries: BTreeMap<String, String>,
}

impl KvStore {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.entries.insert(key.to_string(), value.into());
    }
}

pub async fn load_store(path: &Path) -> KvStore {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(store) => store,
            Err(err) => {
                error!("failed to parse data file: {err}");
                KvStore::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => KvStore::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            KvStore::default()
        }
    }
}

pub async fn persist_store(path: &Path, store: &KvStore) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(store)?;
    fs::write(path, payload).await?;
    Ok(())
}
