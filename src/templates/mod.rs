pub mod components;

pub use components::{
    favorite_url_card, listing_card, marker_popup, notification, panel_message, CardKind,
};
