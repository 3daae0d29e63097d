use crate::client::notification::Notification;
use maud::{html, Markup};

pub fn notification(n: &Notification) -> Markup {
    html! {
        div class={ "notification notification-" (n.kind.as_str()) } role="status" {
            (n.message)
        }
    }
}
