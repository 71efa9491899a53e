pub mod booking;
pub mod room;

pub use booking::Booking;
pub use room::Room;
