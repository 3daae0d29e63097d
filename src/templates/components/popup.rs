use crate::domain::Listing;
use maud::{html, Markup};
use serde_json::Number;

fn or_na(value: Option<&Number>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

pub fn marker_popup(listing: &Listing) -> Markup {
    let rent = listing.rent_amount.as_ref().and_then(|r| r.amount.as_ref());

    html! {
        div {
            h4 { (listing.display_name()) }
            p { "Rent: $" (or_na(rent)) }
            p { "Bedrooms: " (or_na(listing.bedroom_count.as_ref())) }
            p { "Bathrooms: " (or_na(listing.bathroom_count.as_ref())) }
        }
    }
}
