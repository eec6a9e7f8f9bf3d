use serde::{Deserialize, Serialize};

use crate::entry::EntryId;

/// One (matching entry, rule set) association handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hit {
    pub entry_id: EntryId,
    pub set_name: String,
    pub set_description: String,
}

impl Hit {
    pub fn new(entry_id: EntryId, set_name: &str, set_description: &str) -> Self {
        Self {
            entry_id,
            set_name: set_name.to_string(),
            set_description: set_description.to_string(),
        }
    }
}
