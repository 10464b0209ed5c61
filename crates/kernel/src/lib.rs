pub mod settings;

pub use settings::{
    CatalogPolicy, CatalogSettings, Environment, LogFormat, Settings, TelemetrySettings,
};
