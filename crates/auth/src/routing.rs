//! Role-to-dashboard routing decisions.

use tracing::warn;

/// Navigable destinations the portal routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    AdminOverview,
    InternalOverview,
    AuditOverview,
    ExternalOverview,
    Login,
    NotFound,
}

impl Destination {
    pub fn path(&self) -> &'static str {
        match self {
            Destination::AdminOverview => "/dashboard/admin/overview",
            Destination::InternalOverview => "/dashboard/internal/overview",
            Destination::AuditOverview => "/dashboard/audit/overview",
            Destination::ExternalOverview => "/dashboard/overview",
            Destination::Login => "/login",
            Destination::NotFound => "/404",
        }
    }
}

/// Decide which dashboard an authenticated user lands on.
///
/// Precedence: admin flag beats role; `Internal` and `Audit` roles get
/// their own dashboards; any other role is an external partner. A missing
/// role yields `None` — no navigation, just a logged warning.
pub fn route_for_role(
    role: Option<&str>,
    is_admin: bool,
    special_access: Option<&str>,
) -> Option<Destination> {
    let _ = special_access; // reserved claim: carried, not yet routed on
    if is_admin {
        return Some(Destination::AdminOverview);
    }
    match role {
        Some("Internal") => Some(Destination::InternalOverview),
        Some("Audit") => Some(Destination::AuditOverview),
        Some(_) => Some(Destination::ExternalOverview),
        None => {
            warn!("no valid role found for user; staying on login");
            None
        }
    }
}
