use serde::{Deserialize, Serialize};

/// Body of `POST /api/contact`. Every field is optional on the wire and
/// defaults to empty.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub org: String,
    pub message: String,
}
