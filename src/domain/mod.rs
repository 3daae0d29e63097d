pub mod homes;
pub mod listing;
pub mod viewport;

pub use homes::{FavoriteHome, HomeStatus, SeenHome};
pub use listing::{listing_url, Listing, ListingId};
pub use viewport::{Coordinate, Viewport};
