use serde::{Deserialize, Serialize};

/// A dApp's request to connect to the wallet, as delivered by the
/// extension's messaging layer. This popup never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub app_icon: Option<String>,
    pub origin: String,
    /// Requested permission identifiers, in the order the dApp sent them.
    pub permissions: Vec<String>,
}

impl ConnectionRequest {
    pub fn display_name(&self) -> &str {
        self.app_name.as_deref().unwrap_or("Unknown Application")
    }
}

/// A capability a connecting dApp asks for. Unrecognized identifiers
/// are carried through as `Other` rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Permission {
    ViewAddress,
    ViewBalance,
    CallMethods,
    Other(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionIcon {
    Eye,
    Send,
    Shield,
}

impl PermissionIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            PermissionIcon::Eye => "👁",
            PermissionIcon::Send => "📤",
            PermissionIcon::Shield => "🛡",
        }
    }
}

impl Permission {
    pub fn from_id(id: &str) -> Self {
        match id {
            "view_address" => Permission::ViewAddress,
            "view_balance" => Permission::ViewBalance,
            "call_methods" => Permission::CallMethods,
            other => Permission::Other(other.to_string()),
        }
    }

    pub fn icon(&self) -> PermissionIcon {
        match self {
            Permission::ViewAddress | Permission::ViewBalance => PermissionIcon::Eye,
            Permission::CallMethods => PermissionIcon::Send,
            Permission::Other(_) => PermissionIcon::Shield,
        }
    }

    pub fn description(&self) -> String {
        match self {
            Permission::ViewAddress => {
                "See the address of the selected account".to_string()
            }
            Permission::ViewBalance => {
                "See the balance and activity of the selected account".to_string()
            }
            Permission::CallMethods => {
                "Request approval for transactions and contract calls".to_string()
            }
            Permission::Other(id) => id.clone(),
        }
    }
}
