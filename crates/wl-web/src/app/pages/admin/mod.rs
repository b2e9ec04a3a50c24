pub mod dashboard;
pub mod planners;

pub use dashboard::AdminDashboardPage;
pub use planners::AdminPlannersPage;
