//! Cleaning service types and their per-square-meter rates

use serde::{Deserialize, Serialize};

/// The four cleaning services the bot can quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    General,
    Office,
    AfterRenovation,
    Express,
}

impl ServiceType {
    /// Every service, in menu order
    pub const ALL: [ServiceType; 4] = [
        ServiceType::General,
        ServiceType::Office,
        ServiceType::AfterRenovation,
        ServiceType::Express,
    ];

    /// Price per square meter
    pub const fn rate(self) -> f64 {
        match self {
            ServiceType::General => 45.0,
            ServiceType::Office => 35.0,
            ServiceType::AfterRenovation => 40.0,
            ServiceType::Express => 50.0,
        }
    }

    /// Bot command that requests a quote for this service
    pub const fn command(self) -> &'static str {
        match self {
            ServiceType::General => "general_cleaning",
            ServiceType::Office => "office_cleaning",
            ServiceType::AfterRenovation => "cleaning_after_renovation",
            ServiceType::Express => "express_cleaning",
        }
    }

    /// Stable identifier used for translation keys and log fields
    pub const fn key(self) -> &'static str {
        match self {
            ServiceType::General => "general",
            ServiceType::Office => "office",
            ServiceType::AfterRenovation => "after_renovation",
            ServiceType::Express => "express",
        }
    }

    pub fn cost(self, area: f64) -> f64 {
        area * self.rate()
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
