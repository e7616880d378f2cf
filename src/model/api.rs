use serde::{Deserialize, Serialize};

use crate::model::settings::GuildSettings;

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Error body carrying a human-readable message next to the error code,
/// used for the premium-required rejection the dashboard displays verbatim.
#[derive(Serialize, Deserialize)]
pub struct ErrorMessageDto {
    pub error: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct UpdateSettingsDto {
    pub success: bool,
    pub settings: GuildSettings,
}

#[derive(Serialize, Deserialize)]
pub struct IsPlusDto {
    pub is_plus: bool,
}
