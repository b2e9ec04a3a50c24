pub mod bookings;
pub mod dashboard;
pub mod payments;

pub use bookings::PlannerBookingsPage;
pub use dashboard::PlannerDashboardPage;
pub use payments::PlannerPaymentsPage;
