// Server function modules
// Each module contains related server functions proxying the marketplace API

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod packages;
pub mod payments;
