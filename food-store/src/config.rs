use std::path::PathBuf;

use anyhow::{Context, bail};

const DEFAULT_DIR: &str = "./data";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    File { dir: PathBuf },
    Postgres { database_url: String, max_connections: u32 },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::File {
            dir: PathBuf::from(DEFAULT_DIR),
        }
    }
}

impl StoreConfig {
    /// Reads the backend choice from the environment, honouring a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = lookup("FOOD_STORE_BACKEND").unwrap_or_else(|| String::from("file"));

        match backend.trim().to_ascii_lowercase().as_str() {
            "file" => {
                let dir = lookup("FOOD_STORE_DIR").unwrap_or_else(|| String::from(DEFAULT_DIR));
                Ok(StoreConfig::File { dir: dir.into() })
            }
            "postgres" => {
                let database_url = lookup("DATABASE_URL")
                    .context("DATABASE_URL env var must be set for the postgres backend")?;

                let max_connections = match lookup("FOOD_STORE_MAX_CONNECTIONS") {
                    Some(raw) => raw
                        .parse()
                        .with_context(|| format!("FOOD_STORE_MAX_CONNECTIONS is not a number: {raw}"))?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };

                Ok(StoreConfig::Postgres {
                    database_url,
                    max_connections,
                })
            }
            other => bail!("Unknown FOOD_STORE_BACKEND: {other}"),
        }
    }
}
