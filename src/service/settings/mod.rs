//! Tiered settings merge.
//!
//! The basic/premium split is declared once in `FIELD_RULES` and consulted by
//! a single merge routine, so the partial-write behavior on mixed payloads is
//! a property of the table order rather than scattered conditionals.


use crate::{
    data::{settings::SettingsRepository, store::JsonStore},
    error::{auth::AuthError, AppError},
    model::settings::{GuildSettings, SettingsUpdate},
};

/// Write tier of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    /// Editable by any guild manager.
    Basic,
    /// Requires VRTEX+ membership.
    Premium,
}

struct FieldRule {
    name: &'static str,
    tier: Tier,
    is_present: fn(&SettingsUpdate) -> bool,
    apply: fn(&mut GuildSettings, &SettingsUpdate),
}

/// Field classification table, basic tier ordered before premium.
///
/// The merge walks this table in order, which is what makes the documented
/// partial-write behavior hold: every basic field present in the payload is
/// applied before the first premium field can be rejected.
const FIELD_RULES: [FieldRule; 8] = [
    FieldRule {
        name: "currency",
        tier: Tier::Basic,
        is_present: |update| update.currency.is_some(),
        apply: |record, update| {
            if let Some(currency) = &update.currency {
                record.currency = currency.clone();
            }
        },
    },
    FieldRule {
        name: "tax",
        tier: Tier::Basic,
        is_present: |update| update.tax.is_some(),
        apply: |record, update| {
            if let Some(tax) = update.tax {
                record.tax = tax;
            }
        },
    },
    FieldRule {
        name: "prefix",
        tier: Tier::Basic,
        is_present: |update| update.prefix.is_some(),
        apply: |record, update| {
            if let Some(prefix) = &update.prefix {
                record.prefix = prefix.clone();
            }
        },
    },
    FieldRule {
        name: "disabled_commands",
        tier: Tier::Basic,
        is_present: |update| update.disabled_commands.is_some(),
        apply: |record, update| {
            if let Some(disabled_commands) = &update.disabled_commands {
                record.disabled_commands = disabled_commands.clone();
            }
        },
    },
    FieldRule {
        name: "daily_amount",
        tier: Tier::Premium,
        is_present: |update| update.daily_amount.is_some(),
        apply: |record, update| {
            if let Some(daily_amount) = update.daily_amount {
                record.daily_amount = daily_amount;
            }
        },
    },
    FieldRule {
        name: "drop_amount",
        tier: Tier::Premium,
        is_present: |update| update.drop_amount.is_some(),
        apply: |record, update| {
            if let Some(drop_amount) = update.drop_amount {
                record.drop_amount = drop_amount;
            }
        },
    },
    FieldRule {
        name: "work_multiplier",
        tier: Tier::Premium,
        is_present: |update| update.work_multiplier.is_some(),
        apply: |record, update| {
            if let Some(work_multiplier) = update.work_multiplier {
                record.work_multiplier = work_multiplier;
            }
        },
    },
    FieldRule {
        name: "cooldowns",
        tier: Tier::Premium,
        is_present: |update| update.cooldowns.is_some(),
        apply: |record, update| {
            if let Some(cooldowns) = &update.cooldowns {
                record.cooldowns = cooldowns.clone();
            }
        },
    },
];

/// Applies the payload fields to the record in table order.
///
/// Returns the name of the first premium field hit while ineligible, with
/// every field before it already applied to `record`.
fn apply_update(
    record: &mut GuildSettings,
    update: &SettingsUpdate,
    is_plus: bool,
) -> Option<&'static str> {
    for rule in &FIELD_RULES {
        if !(rule.is_present)(update) {
            continue;
        }
        if rule.tier == Tier::Premium && !is_plus {
            return Some(rule.name);
        }
        (rule.apply)(record, update);
    }

    None
}

pub struct SettingsService<'a> {
    store: &'a JsonStore,
}

impl<'a> SettingsService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Returns the guild's settings, synthesizing the defaults for a guild
    /// that has never been configured. Nothing is persisted on read.
    pub async fn get(&self, guild_id: &str) -> Result<GuildSettings, AppError> {
        let record = SettingsRepository::new(self.store)
            .find_by_guild_id(guild_id)
            .await?;

        Ok(record.unwrap_or_default())
    }

    /// Merges an update payload into the guild's record and persists it.
    ///
    /// Premium-gated fields require `is_plus`; the first one submitted
    /// without it aborts with `premium_required`. Basic fields applied
    /// before the abort are persisted anyway - the partial write is
    /// documented dashboard behavior, not an oversight.
    pub async fn update(
        &self,
        guild_id: &str,
        update: &SettingsUpdate,
        is_plus: bool,
    ) -> Result<GuildSettings, AppError> {
        let repo = SettingsRepository::new(self.store);

        let mut record = repo.find_by_guild_id(guild_id).await?.unwrap_or_default();
        let unchanged = record.clone();

        let denied_field = apply_update(&mut record, update, is_plus);

        // Successful updates always write, even when the submitted values
        // match the current record. A rejected payload writes only the fields
        // it managed to change.
        if denied_field.is_none() || record != unchanged {
            repo.upsert(guild_id, &record).await?;
        }

        if let Some(field) = denied_field {
            tracing::debug!(
                "Rejected premium field `{}` for guild {} from non-premium user",
                field,
                guild_id
            );
            return Err(AuthError::PremiumRequired.into());
        }

        Ok(record)
    }
}
