use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResult {
    pub granted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PermissionResult {
    pub fn granted() -> Self {
        Self {
            granted: true,
            error: None,
        }
    }

    pub fn refused() -> Self {
        Self {
            granted: false,
            error: None,
        }
    }
}
