//! Specialized repositories, one per backend resource.
//!
//! Each type here wraps a [`Repository`](crate::repository::Repository) for
//! its endpoint and adds the narrow, named queries and transitions that
//! resource supports. Per-resource verb choices (PATCH vs PUT, action POSTs)
//! follow the backend contract for that resource and must not be unified.

pub mod appointments;
pub mod audit_logs;
pub mod customers;
pub mod inventory;
pub mod invoices;
pub mod job_cards;
pub mod leads;
pub mod parts_issues;
pub mod purchase_orders;
pub mod quotations;
pub mod service_centers;
pub mod users;
pub mod vehicles;

pub use appointments::{Appointment, Appointments};
pub use audit_logs::{AuditLog, AuditLogs};
pub use customers::{Customer, Customers, NewCustomer};
pub use inventory::{Inventory, InventoryPart, StockAdjustment};
pub use invoices::{Invoice, InvoiceItem, Invoices, NewInvoice};
pub use job_cards::{JobCard, JobCards};
pub use leads::{Lead, Leads};
pub use parts_issues::{NewPartsIssue, PartsIssue, PartsIssues};
pub use purchase_orders::{PurchaseOrder, PurchaseOrders};
pub use quotations::{Quotation, Quotations};
pub use service_centers::{ServiceCenter, ServiceCenters};
pub use users::{User, Users};
pub use vehicles::{NewVehicle, Vehicle, Vehicles};
