// Identity context
// Who is looking at the calendar, and who their partner is

use serde::{Deserialize, Serialize};

/// The viewer and their linked partner, resolved once per session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityContext {
    pub current_user_id: String,
    /// `None` until a partner has joined the couple
    pub partner_user_id: Option<String>,
}

impl IdentityContext {
    pub fn new(current_user_id: impl Into<String>, partner_user_id: Option<String>) -> Self {
        Self {
            current_user_id: current_user_id.into(),
            partner_user_id: partner_user_id.filter(|id| !id.trim().is_empty()),
        }
    }

    /// A viewer with no linked partner yet.
    pub fn solo(current_user_id: impl Into<String>) -> Self {
        Self::new(current_user_id, None)
    }

    pub fn has_partner(&self) -> bool {
        self.partner_user_id.is_some()
    }

    pub fn is_current_user(&self, user_id: &str) -> bool {
        self.current_user_id == user_id
    }

    pub fn is_partner(&self, user_id: &str) -> bool {
        self.partner_user_id.as_deref() == Some(user_id)
    }
}
