//! Role Model (员工角色)
//!
//! The five administrative namespaces. A closed enum — the HTTP surface is
//! parameterized over this instead of being copied per role.

use serde::{Deserialize, Serialize};

/// Employee role / URL namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    InventoryManager,
    TransactionManager,
    UserManager,
    OrderSupport,
}

impl Role {
    pub const ALL: &[Role] = &[
        Role::Admin,
        Role::InventoryManager,
        Role::TransactionManager,
        Role::UserManager,
        Role::OrderSupport,
    ];

    /// Name as it appears in URL paths and JWT claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::InventoryManager => "InventoryManager",
            Role::TransactionManager => "TransactionManager",
            Role::UserManager => "UserManager",
            Role::OrderSupport => "OrderSupport",
        }
    }

    /// Human-readable label used in audit descriptions
    pub fn audit_label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::InventoryManager => "Inventory Manager",
            Role::TransactionManager => "Transaction Manager",
            Role::UserManager => "User Manager",
            Role::OrderSupport => "Order Support",
        }
    }

    /// Parse a role name (URL segment or claim), case-insensitive
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
