use serde::{Deserialize, Serialize};

fn default_currency() -> String {
    "💰".to_string()
}

fn default_tax() -> i64 {
    5
}

fn default_prefix() -> String {
    "ve".to_string()
}

fn default_daily_amount() -> i64 {
    3000
}

fn default_drop_amount() -> i64 {
    1000
}

fn default_work_multiplier() -> f64 {
    1.0
}

fn default_drop_seconds() -> i64 {
    3600
}

/// Per-guild cooldown configuration. Premium-gated as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cooldowns {
    #[serde(default = "default_drop_seconds")]
    pub drop_seconds: i64,
}

impl Default for Cooldowns {
    fn default() -> Self {
        Self {
            drop_seconds: default_drop_seconds(),
        }
    }
}

/// Settings record for one guild.
///
/// Stored records may be partial (only the fields a manager ever submitted);
/// the per-field serde defaults fill in the documented default for anything
/// missing, so a read always yields the complete object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuildSettings {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_tax")]
    pub tax: i64,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_daily_amount")]
    pub daily_amount: i64,
    #[serde(default = "default_drop_amount")]
    pub drop_amount: i64,
    #[serde(default = "default_work_multiplier")]
    pub work_multiplier: f64,
    #[serde(default)]
    pub cooldowns: Cooldowns,
    #[serde(default)]
    pub disabled_commands: Vec<String>,
}

impl Default for GuildSettings {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            tax: default_tax(),
            prefix: default_prefix(),
            daily_amount: default_daily_amount(),
            drop_amount: default_drop_amount(),
            work_multiplier: default_work_multiplier(),
            cooldowns: Cooldowns::default(),
            disabled_commands: Vec::new(),
        }
    }
}

/// Partial settings payload submitted by the dashboard.
///
/// Every field is optional; absent fields leave the stored value untouched.
/// Which fields are basic-tier and which require VRTEX+ is declared by the
/// field table in the settings service, not here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsUpdate {
    pub currency: Option<String>,
    pub tax: Option<i64>,
    pub prefix: Option<String>,
    pub disabled_commands: Option<Vec<String>>,
    pub daily_amount: Option<i64>,
    pub drop_amount: Option<i64>,
    pub work_multiplier: Option<f64>,
    pub cooldowns: Option<Cooldowns>,
}
