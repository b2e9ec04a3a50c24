mod lock;

pub use lock::LockIcon;
