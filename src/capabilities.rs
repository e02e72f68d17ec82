//! Role-derived capabilities.
//!
//! The backend hands the client a single role string per session. Instead of
//! re-deriving boolean flags from it at every call site, the role is resolved
//! once into a capability set that the UI layer queries.

use std::collections::HashSet;

/// One permitted action class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    ManageUsers,
    ManageServiceCenters,
    ManageInventory,
    AdjustStock,
    ApprovePurchaseOrders,
    IssueParts,
    CreateJobCards,
    CreateInvoices,
    ManageQuotations,
    ManageLeads,
    ViewAuditLogs,
}

/// Resolve a role string to its capability set. Unknown roles get no
/// capabilities.
pub fn capabilities_for_role(role: &str) -> HashSet<Capability> {
    use Capability::*;

    let caps: &[Capability] = match role {
        "admin" => &[
            ManageUsers,
            ManageServiceCenters,
            ManageInventory,
            AdjustStock,
            ApprovePurchaseOrders,
            IssueParts,
            CreateJobCards,
            CreateInvoices,
            ManageQuotations,
            ManageLeads,
            ViewAuditLogs,
        ],
        "service_manager" => &[
            ManageInventory,
            ApprovePurchaseOrders,
            CreateJobCards,
            CreateInvoices,
            ManageQuotations,
            ViewAuditLogs,
        ],
        "service_advisor" => &[CreateJobCards, CreateInvoices, ManageQuotations, ManageLeads],
        "inventory_manager" => &[ManageInventory, AdjustStock, IssueParts],
        "technician" => &[CreateJobCards],
        "accountant" => &[CreateInvoices, ViewAuditLogs],
        _ => &[],
    };
    caps.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_has_everything_advisor_has_a_subset() {
        let admin = capabilities_for_role("admin");
        let advisor = capabilities_for_role("service_advisor");
        assert!(advisor.is_subset(&admin));
        assert!(admin.contains(&Capability::ManageUsers));
        assert!(!advisor.contains(&Capability::ManageUsers));
    }

    #[test]
    fn unknown_role_gets_nothing() {
        assert!(capabilities_for_role("intern").is_empty());
    }

    #[test]
    fn stock_adjustment_is_limited_to_inventory_roles() {
        assert!(capabilities_for_role("inventory_manager").contains(&Capability::AdjustStock));
        assert!(!capabilities_for_role("technician").contains(&Capability::AdjustStock));
    }
}
