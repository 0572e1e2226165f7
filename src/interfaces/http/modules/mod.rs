pub mod amenities;
pub mod health;
pub mod places;
pub mod reviews;
pub mod users;
