pub mod auth;
pub mod avatar_dropdown;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod modal;
pub mod navbar;
pub mod status_badge;
pub mod toast;

pub use auth::{RequireRole, RoleGate};
pub use avatar_dropdown::AvatarDropDown;
pub use footer::Footer;
pub use layout::Layout;
pub use modal::Modal;
pub use navbar::NavBar;
pub use status_badge::{BookingStatusBadge, PaymentBadge};
pub use toast::{Toast, ToastMessage, ToastType};
