use maud::{html, Markup};

pub mod card;
pub mod notification;
pub mod popup;

pub use card::{favorite_url_card, listing_card, CardKind};
pub use notification::notification;
pub use popup::marker_popup;

pub fn button(class: &str, action: &str, url: &str, label: &str) -> Markup {
    html! {
        button class={ "btn " (class) } data-action=(action) data-url=(url) { (label) }
    }
}

/// Placeholder shown in a results panel instead of cards.
pub fn panel_message(class: &str, text: &str) -> Markup {
    html! {
        div class=(class) { (text) }
    }
}
