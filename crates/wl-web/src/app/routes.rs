use dioxus::prelude::*;
use wl_types::access::RouteAccess;
use wl_types::roles::UserRole;

use crate::{
    components::Layout,
    pages::{
        AdminDashboardPage, AdminPlannersPage, ClientBookingsPage, ClientDashboardPage, HomePage,
        LoginPage, LogoutPage, PackagesPage, PlannerBookingsPage, PlannerDashboardPage,
        PlannerPaymentsPage,
    },
};

// Access rules, declared once at route-registration time. Pages hand these
// to the RequireRole guard; the navbar derives nothing from them.
pub const CLIENT_ONLY: RouteAccess = RouteAccess::role(UserRole::Client);
pub const PLANNER_ONLY: RouteAccess = RouteAccess::role(UserRole::Planner);
pub const PLANNER_APPROVED: RouteAccess = RouteAccess::approved_planner();
pub const ADMIN_ONLY: RouteAccess = RouteAccess::role(UserRole::Admin);

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Routes {
    #[route("/")]
    HomePage {},
    #[route("/login")]
    LoginPage {},
    #[route("/logout")]
    LogoutPage {},
    #[route("/packages")]
    PackagesPage {},
    #[route("/dashboard")]
    ClientDashboardPage {},
    #[route("/bookings")]
    ClientBookingsPage {},
    #[route("/planner")]
    PlannerDashboardPage {},
    #[route("/planner/bookings")]
    PlannerBookingsPage {},
    #[route("/planner/payments")]
    PlannerPaymentsPage {},
    #[route("/admin")]
    AdminDashboardPage {},
    #[route("/admin/planners")]
    AdminPlannersPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx!(Layout { p { "Not found: /{path}" } })
}
