pub mod bookings;
pub mod dashboard;

pub use bookings::ClientBookingsPage;
pub use dashboard::ClientDashboardPage;
