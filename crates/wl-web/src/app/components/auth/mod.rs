// Authentication components

pub mod require_role;
pub mod role_gate;

pub use require_role::RequireRole;
pub use role_gate::RoleGate;
