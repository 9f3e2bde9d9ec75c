pub mod models;
pub mod pii;

pub use models::{
    Booking, BookingStatus, BookingWithProperty, Coordinates, Location, LocationInput, NewBooking,
    Profile, Property,
};
pub use pii::Masked;
