use crate::domain::Listing;
use crate::templates::components::button;
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// In the unseen list: favorite and mark-as-seen actions.
    Result,
    /// In the favorites grid: remove action only.
    Favorite,
}

pub fn listing_card(listing: &Listing, kind: CardKind, is_favorite: bool, active: bool) -> Markup {
    let url = listing.url();
    let card_id = format!(
        "card_{}",
        listing.id().map(ToString::to_string).unwrap_or_default()
    );

    html! {
        div.card.active[active] id=(card_id) {
            a target="_blank" href=(url) {
                @if let Some(photo) = listing.featured_photo() {
                    img src=(photo.url) alt=(listing.display_name());
                } @else {
                    div class="no-image" { "No Image Available" }
                }
                @if is_favorite {
                    div class="favorite-badge" { "♥ Favorite" }
                }
            }
            div class="card-content" {
                div class="card-name" { (listing.display_name()) }
                div class="card-url" { (url) }
                div class="card-actions" {
                    @match kind {
                        CardKind::Result => {
                            (button("btn-favorite", "favorite", &url, "♥ Favorite"))
                            (button("btn-seen", "seen", &url, "Mark as Seen"))
                        }
                        CardKind::Favorite => {
                            (button("btn-remove", "remove", &url, "Remove from Favorites"))
                        }
                    }
                }
            }
        }
    }
}

/// Favorite whose listing snapshot is missing: only the URL is known.
pub fn favorite_url_card(url: &str) -> Markup {
    html! {
        div.card {
            a target="_blank" href=(url) {
                div class="no-image" { "No Image Available" }
                div class="favorite-badge" { "♥ Favorite" }
            }
            div class="card-content" {
                div class="card-name" { "Unnamed Property" }
                div class="card-url" { (url) }
                div class="card-actions" {
                    (button("btn-remove", "remove", url, "Remove from Favorites"))
                }
            }
        }
    }
}
