pub mod admin;
pub mod client;
pub mod home;
pub mod login;
pub mod logout;
pub mod packages;
pub mod planner;

pub use admin::{AdminDashboardPage, AdminPlannersPage};
pub use client::{ClientBookingsPage, ClientDashboardPage};
pub use home::HomePage;
pub use login::LoginPage;
pub use logout::LogoutPage;
pub use packages::PackagesPage;
pub use planner::{PlannerBookingsPage, PlannerDashboardPage, PlannerPaymentsPage};
