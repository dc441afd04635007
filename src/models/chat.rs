use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// Any role string besides the two above ("system", "tool", ...).
    /// Accepted anywhere in the history, but never answered.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        ChatTurn {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatTurn {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered conversation supplied (and persisted) by the caller.
/// Nothing is kept between requests; the whole history arrives every time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory(pub Vec<ChatTurn>);

impl ChatHistory {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The turn a reply is owed to: the last one, which must come from the user.
    /// Empty history or any other last role is `InvalidChatState`.
    pub fn latest_user_turn(&self) -> Result<&ChatTurn, ApiError> {
        match self.0.last() {
            Some(turn) if turn.role == Role::User => Ok(turn),
            _ => Err(ApiError::InvalidChatState),
        }
    }
}

impl From<Vec<ChatTurn>> for ChatHistory {
    fn from(turns: Vec<ChatTurn>) -> Self {
        ChatHistory(turns)
    }
}
