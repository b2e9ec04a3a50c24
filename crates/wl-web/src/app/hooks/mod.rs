pub mod bookings;

pub use bookings::{use_bookings, BookingScope, BookingsHandle};
