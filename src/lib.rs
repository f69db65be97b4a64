pub mod common;
pub mod cow;
pub mod herd;
pub mod interference;

pub use common::config::{load_pasture_config, CowConfig, InterferenceConfig, PastureConfig};
pub use common::error::CowError;
pub use common::interrupt::Interrupt;
pub use cow::Cow;
pub use herd::{create_herd, Pasture};
pub use interference::Interference;
