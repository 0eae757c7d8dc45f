//! Admin Pages
//!
//! One module per screen. Page selection is an in-memory enum driven by the
//! sidebar; there is no URL router.

mod announcements;
mod comprehensive;
mod email_test;
mod home;
mod inventory;
mod login;
mod notifications;
mod reporting;
mod users;

pub use announcements::AnnouncementsPage;
pub use comprehensive::ComprehensiveReportsPage;
pub use email_test::EmailTestPage;
pub use home::HomePage;
pub use inventory::InventoryPage;
pub use login::StudentLogin;
pub use notifications::NotificationsPage;
pub use reporting::ReportingDashboardPage;
pub use users::UserManagementPage;

/// Admin screens reachable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Notifications,
    Announcements,
    Inventory,
    Users,
    Reporting,
    Comprehensive,
    EmailTest,
}
