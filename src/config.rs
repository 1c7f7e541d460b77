use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub seed_on_first_run: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./store-data"),
            seed_on_first_run: true,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let data_dir = env::var("STORE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./store-data"));
        let seed_on_first_run = match env::var("STORE_SEED") {
            Ok(raw) => parse_flag(&raw)
                .ok_or_else(|| anyhow::anyhow!("invalid STORE_SEED value: {raw}"))?,
            Err(_) => true,
        };
        Ok(Self {
            data_dir,
            seed_on_first_run,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
