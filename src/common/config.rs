use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CowConfig {
    pub base_processing_ms: u64,
    pub slowdown_factor: u32,
}

impl Default for CowConfig {
    fn default() -> Self {
        Self {
            base_processing_ms: 100,
            slowdown_factor: 5,
        }
    }
}

impl CowConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.base_processing_ms * self.slowdown_factor as u64)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InterferenceConfig {
    pub initial_delay_ms: u64,
    pub interval_ms: u64,
    pub trigger_chance: f64,
    pub min_extra_ms: u64,
    pub max_extra_ms: u64,
    pub batch_prelude_chance: f64,
    pub per_item_chance: f64,
    pub per_item_extra_ms: u64,
}

impl Default for InterferenceConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 1000,
            interval_ms: 2000,
            trigger_chance: 0.3,
            min_extra_ms: 200,
            max_extra_ms: 1000,
            batch_prelude_chance: 0.4,
            per_item_chance: 0.2,
            per_item_extra_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PastureConfig {
    pub cow: CowConfig,
    pub interference: InterferenceConfig,
}

use anyhow::Result;
use std::fs::File;
use std::io::BufReader;

pub fn load_pasture_config(path: &str) -> Result<PastureConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}
