//! Role View
//!
//! The single role-parameterized projection behind all five employee
//! namespaces. Per-role variance is limited to which permission key gates
//! a screen and the actor label written into audit descriptions — the
//! behavior is otherwise identical, which is what keeps the five URL
//! surfaces one implementation instead of five copies.

use crate::auth::CurrentUser;
use crate::auth::permissions::order_screen_permission;
use shared::models::{OrderStatus, Role};

/// One role's view over the order screens
#[derive(Debug, Clone, Copy)]
pub struct RoleView {
    role: Role,
}

impl RoleView {
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Permission key gating the given status screen for this role.
    ///
    /// Keys are shared across roles — access differences come from role
    /// defaults and per-user overrides, not from distinct key spaces.
    pub fn screen_permission(&self, status: OrderStatus) -> &'static str {
        order_screen_permission(status)
    }

    /// Audit label for an actor operating under this namespace,
    /// e.g. `alice (Order Support)`
    pub fn actor_label(&self, actor: &CurrentUser) -> String {
        format!("{} ({})", actor.username, self.role.audit_label())
    }

    /// Audit description prefix for this namespace
    pub fn describe(&self, detail: impl std::fmt::Display) -> String {
        format!("{}: {}", self.role.audit_label(), detail)
    }
}
