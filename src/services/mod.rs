// Accounts and catalog
pub mod categories;
pub mod providers;
pub mod users;

// Listings
pub mod catalog;
pub mod furniture;

// Fulfilment
pub mod bookings;
pub mod orders;

// Feedback and pricing
pub mod estimating;
pub mod reviews;
