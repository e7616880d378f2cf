use serde::{Deserialize, Serialize};

use crate::{data::store::JsonStore, error::store::StoreError};

/// On-disk shape of the VRTEX+ member list.
///
/// Entries are kept as raw JSON values because the document is hand-edited
/// and historically holds a mix of string and integer user ids.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MembersDocument {
    #[serde(default)]
    pub plus_members: Vec<serde_json::Value>,
}

impl MembersDocument {
    /// Whether the given user id appears in the member list, comparing by
    /// stringified id so `"123"` and `123` both match user `123`.
    pub fn contains(&self, user_id: &str) -> bool {
        self.plus_members
            .iter()
            .filter_map(member_id)
            .any(|id| id == user_id)
    }
}

fn member_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(id) => Some(id.clone()),
        serde_json::Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Read access to the VRTEX+ membership allowlist.
///
/// Membership is only ever mutated out-of-band by editing the document, so
/// the repository re-reads it on every check and exposes no writes.
pub struct MembershipRepository<'a> {
    store: &'a JsonStore,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    pub async fn is_plus_member(&self, user_id: &str) -> Result<bool, StoreError> {
        let members = self.store.read_members().await?;
        Ok(members.contains(user_id))
    }
}
