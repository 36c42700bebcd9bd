use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The top-level address book document. Contact records are kept opaque:
/// any JSON value is accepted and printed as-is. The contacts map preserves
/// the key order of the source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressBook {
    #[serde(default)]
    pub contacts: Map<String, Value>,
}

impl AddressBook {
    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }
}

/// Output of the transform stage: one rendered line per contact, in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintResult {
    pub lines: Vec<String>,
    pub contact_count: usize,
}
