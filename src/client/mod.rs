//! The browser-side half of the app: the listing manager, the API it talks
//! to, and where it keeps the last search area.

pub mod api;
pub mod manager;
pub mod notification;
pub mod search;
pub mod viewport_store;

pub use api::{ClientError, HomesApi, HttpHomesApi};
pub use manager::{FavoriteEntry, ListingManager, SearchTicket, Tab};
pub use notification::{Notification, NotificationKind};
pub use search::SearchPayload;
pub use viewport_store::{FileViewportStore, MemoryViewportStore, ViewportStore};

#[cfg(test)]
mod tests;
