pub mod device;
pub mod helpers;

pub use device::{DeviceClassifier, DeviceType, EnvironmentSignals};
pub use helpers::domain::DomainParser;
