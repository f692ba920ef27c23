//! Restoration context

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from minted tokens back to the original literal values.
///
/// A fresh context is produced by every mask call and is never shared or
/// merged across calls: two contexts may map the same token text to
/// different literals with no cross-contamination. The engine imposes no
/// retention or expiry policy; persisting the context between mask and
/// restore is the caller's concern, and the JSON helpers below are the
/// supported wire shape for that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestoreContext {
    /// Token text to original value, e.g. `"<<EMAIL_1>>" -> "joao@example.com"`
    pub data: HashMap<String, String>,
}

impl RestoreContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Original literal for a token, if this context minted it.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.data.get(token).map(String::as_str)
    }

    /// Serialize as the flat `{"data": {token: literal}}` JSON object.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize a context previously produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
