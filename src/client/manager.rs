use crate::client::api::{ClientError, HomesApi};
use crate::client::notification::Notification;
use crate::client::search::SearchPayload;
use crate::client::viewport_store::ViewportStore;
use crate::domain::homes::{AddFavoriteRequest, MarkSeenRequest};
use crate::domain::{Listing, Viewport};
use crate::map::{BoundingBox, MapListener};
use crate::templates::{favorite_url_card, listing_card, panel_message, CardKind};
use maud::{html, Markup};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Unseen,
    Favorites,
}

/// A favorite as the client caches it. `listing` is `None` when the server
/// had no usable snapshot; the URL still counts for de-duplication.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteEntry {
    pub url: String,
    pub listing: Option<Listing>,
}

/// Issued when a search starts; only the newest one may update the results.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    seq: u64,
    pub payload: SearchPayload,
}

/// Holds the search area, the fetched listings and the cached seen/favorite
/// state, and renders the two result panels.
pub struct ListingManager<A: HomesApi, S: ViewportStore> {
    api: A,
    store: S,

    viewport: Viewport,
    all_results: Vec<Listing>,
    seen: HashSet<String>,
    favorites: Vec<FavoriteEntry>,
    tab: Tab,
    selected: Option<String>,

    results_html: Markup,
    favorites_html: Markup,
    notification: Option<Notification>,
    marker_update: Option<Vec<Listing>>,

    issued: u64,
}

impl<A: HomesApi, S: ViewportStore> ListingManager<A, S> {
    /// Starts from the stored viewport, or the default one.
    pub fn new(api: A, store: S) -> Self {
        let viewport = match store.load() {
            Ok(Some(v)) => v,
            Ok(None) => Viewport::default(),
            Err(e) => {
                log::warn!("Ignoring stored viewport: {e}");
                Viewport::default()
            }
        };

        Self {
            api,
            store,
            viewport,
            all_results: Vec::new(),
            seen: HashSet::new(),
            favorites: Vec::new(),
            tab: Tab::Unseen,
            selected: None,
            results_html: html! {},
            favorites_html: html! {},
            notification: None,
            marker_update: None,
            issued: 0,
        }
    }

    /// Loads the stored seen/favorite state, then runs the first search.
    pub fn init(&mut self) {
        self.load_stored_data();
        self.search();
        log::info!("ListingManager initialized");
    }

    /// A failing backend leaves the caches empty; searching still works.
    pub fn load_stored_data(&mut self) {
        match self.api.seen_homes() {
            Ok(homes) => self.seen = homes.into_iter().map(|h| h.property_url).collect(),
            Err(e) => log::error!("Error loading seen homes: {e}"),
        }

        match self.api.favorites() {
            Ok(favorites) => {
                self.favorites = favorites
                    .into_iter()
                    .map(|fav| {
                        let listing = fav.property_data.and_then(|data| {
                            serde_json::from_value(data)
                                .map_err(|e| {
                                    log::warn!("Bad snapshot for {}: {e}", fav.property_url)
                                })
                                .ok()
                        });
                        FavoriteEntry {
                            url: fav.property_url,
                            listing,
                        }
                    })
                    .collect();
            }
            Err(e) => log::error!("Error loading favorites: {e}"),
        }

        log::info!(
            "Loaded from backend: {} seen, {} favorites",
            self.seen.len(),
            self.favorites.len()
        );
    }

    /// Replace the search area with `bounds`, remember it, and search again.
    pub fn update_search_bounds(&mut self, bounds: BoundingBox) {
        log::info!("Search bounds changed: {bounds:?}");
        self.viewport = Viewport::from(bounds);

        if let Err(e) = self.store.save(&self.viewport) {
            log::warn!("Could not persist viewport: {e}");
        }

        self.search();
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket {
            seq: self.issued,
            payload: SearchPayload::for_viewport(self.viewport),
        }
    }

    /// Apply the outcome of a search. Results from anything but the most
    /// recently issued ticket are dropped; returns whether this one was applied.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Listing>, ClientError>,
    ) -> bool {
        if ticket.seq != self.issued {
            log::debug!(
                "Dropping stale search #{} (latest is #{})",
                ticket.seq,
                self.issued
            );
            return false;
        }

        match result {
            Ok(listings) => {
                self.all_results = listings;
                self.display_unseen_results();
            }
            Err(e) => {
                log::error!("Error fetching data: {e}");
                self.results_html = panel_message("error", &format!("Error loading data: {e}"));
            }
        }
        true
    }

    /// Run the search for the current viewport and apply it.
    pub fn search(&mut self) {
        let ticket = self.begin_search();
        let result = self.api.search(&ticket.payload);
        self.complete_search(ticket, result);
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.refresh_current_tab();
    }

    fn refresh_current_tab(&mut self) {
        match self.tab {
            Tab::Unseen => self.display_unseen_results(),
            Tab::Favorites => self.display_favorites(),
        }
    }

    pub fn is_seen(&self, listing: &Listing) -> bool {
        self.seen.contains(&listing.url())
    }

    pub fn is_favorite(&self, url: &str) -> bool {
        self.favorites.iter().any(|f| f.url == url)
    }

    /// Fetched listings minus the seen ones, recomputed on every call.
    pub fn unseen_results(&self) -> Vec<&Listing> {
        self.all_results
            .iter()
            .filter(|l| !self.is_seen(l))
            .collect()
    }

    pub fn mark_as_seen(&mut self, listing: &Listing) {
        let url = listing.url();
        if self.seen.contains(&url) {
            log::debug!("Already marked as seen: {url}");
            return;
        }

        match self.api.mark_seen(&MarkSeenRequest::for_listing(listing)) {
            Ok(()) => {
                self.seen.insert(url);
                log::info!("Marked as seen: {}", listing.display_name());
                self.notification = Some(Notification::success("Marked as seen!"));
                self.display_unseen_results();
            }
            Err(e) => {
                log::error!("Error marking as seen: {e}");
                self.notification = Some(Notification::error("Failed to mark as seen"));
            }
        }
    }

    pub fn add_to_favorites(&mut self, listing: &Listing) {
        let url = listing.url();
        if self.is_favorite(&url) {
            log::debug!("Already in favorites: {url}");
            return;
        }

        let sent = AddFavoriteRequest::for_listing(listing)
            .map_err(|e| ClientError::Decode(e.to_string()))
            .and_then(|body| self.api.add_favorite(&body));

        match sent {
            Ok(()) => {
                self.favorites.push(FavoriteEntry {
                    url,
                    listing: Some(listing.clone()),
                });
                log::info!("Added to favorites: {}", listing.display_name());
                self.notification = Some(Notification::success("Added to favorites!"));
                self.refresh_current_tab();
            }
            Err(e) => {
                log::error!("Error adding to favorites: {e}");
                self.notification = Some(Notification::error("Failed to add to favorites"));
            }
        }
    }

    pub fn remove_from_favorites(&mut self, url: &str) {
        match self.api.remove_favorite(url) {
            Ok(()) => {
                self.favorites.retain(|f| f.url != url);
                log::info!("Removed from favorites: {url}");
                self.notification = Some(Notification::success("Removed from favorites!"));
                self.display_favorites();
            }
            Err(ClientError::NotFound) => {
                log::warn!("Favorite not found on server: {url}");
                self.notification = Some(Notification::error("Home not found in favorites"));
            }
            Err(e) => {
                log::error!("Error removing from favorites: {e}");
                self.notification = Some(Notification::error("Failed to remove from favorites"));
            }
        }
    }

    /// Highlight the card for `listing`, e.g. after its marker was clicked.
    pub fn select_listing(&mut self, listing: &Listing) {
        self.selected = listing.id().map(ToString::to_string);
        if self.tab == Tab::Unseen {
            self.render_unseen(false);
        }
    }

    pub fn display_unseen_results(&mut self) {
        self.render_unseen(true);
    }

    fn render_unseen(&mut self, report_markers: bool) {
        if self.all_results.is_empty() {
            self.results_html = panel_message("loading", "Loading...");
            return;
        }

        let unseen: Vec<Listing> = self.unseen_results().into_iter().cloned().collect();
        if unseen.is_empty() {
            self.results_html = panel_message("error", "All results have been seen");
            return;
        }

        let selected = self.selected.as_deref();
        self.results_html = html! {
            @for listing in &unseen {
                (listing_card(
                    listing,
                    CardKind::Result,
                    self.is_favorite(&listing.url()),
                    selected.is_some() && listing.id().map(ToString::to_string).as_deref() == selected,
                ))
            }
        };

        if report_markers {
            self.marker_update = Some(unseen);
        }
    }

    pub fn display_favorites(&mut self) {
        if self.favorites.is_empty() {
            self.favorites_html = panel_message(
                "error",
                "No favorites yet. Add some homes to your favorites!",
            );
            return;
        }

        self.favorites_html = html! {
            div class="favorites-grid" {
                @for entry in &self.favorites {
                    @match &entry.listing {
                        Some(listing) => {
                            (listing_card(listing, CardKind::Favorite, true, false))
                        }
                        None => {
                            (favorite_url_card(&entry.url))
                        }
                    }
                }
            }
        };
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn all_results(&self) -> &[Listing] {
        &self.all_results
    }

    pub fn seen_urls(&self) -> &HashSet<String> {
        &self.seen
    }

    pub fn favorites(&self) -> &[FavoriteEntry] {
        &self.favorites
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn selected_listing_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn results_html(&self) -> &Markup {
        &self.results_html
    }

    pub fn favorites_html(&self) -> &Markup {
        &self.favorites_html
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn notification_html(&self) -> Option<Markup> {
        self.notification.as_ref().map(crate::templates::notification)
    }

    /// Drop the toast once it has been shown.
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<A: HomesApi, S: ViewportStore> MapListener for ListingManager<A, S> {
    fn on_bounds_changed(&mut self, bounds: BoundingBox) {
        self.update_search_bounds(bounds);
    }

    fn on_marker_clicked(&mut self, listing: &Listing) {
        self.select_listing(listing);
    }

    fn take_marker_update(&mut self) -> Option<Vec<Listing>> {
        self.marker_update.take()
    }
}
