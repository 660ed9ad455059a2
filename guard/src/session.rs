//! Authenticated identity returned by the session endpoint.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Verified session of the current actor.
///
/// Field names on the wire follow the session endpoint:
/// `{ userId, email, name, roles, companyId }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub roles: BTreeSet<String>,
    #[serde(rename = "companyId")]
    pub organization_id: String,
}

impl Session {
    /// A payload that parses but names no user or organization is not a session.
    pub(crate) fn has_identity(&self) -> bool {
        !self.user_id.trim().is_empty() && !self.organization_id.trim().is_empty()
    }
}
