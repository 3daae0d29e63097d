use crate::api::homes;
use crate::app::App;
use crate::responses::{preflight_response, ResultResp};
use crate::static_files;
use astra::Request;

pub const ENDPOINTS: [&str; 7] = [
    "POST /api/homes/seen - Mark a home as seen",
    "GET /api/homes/seen - Get all seen homes",
    "POST /api/homes/favorites - Add home to favorites",
    "GET /api/homes/favorites - Get all favorite homes",
    "DELETE /api/homes/favorites - Remove home from favorites",
    "GET /api/homes/status?property_url=... - Check if home is seen/favorited",
    "POST /graphql - GraphQL proxy",
];

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    log::info!("{method} {path}");

    match (method.as_str(), path.as_str()) {
        ("OPTIONS", _) => preflight_response(),

        ("POST", "/api/homes/seen") => homes::mark_seen(&mut req, &app.db),
        ("GET", "/api/homes/seen") => homes::list_seen(&app.db),
        ("POST", "/api/homes/favorites") => homes::add_favorite(&mut req, &app.db),
        ("GET", "/api/homes/favorites") => homes::list_favorites(&app.db),
        ("DELETE", "/api/homes/favorites") => homes::remove_favorite(&mut req, &app.db),
        ("GET", "/api/homes/status") => homes::status(&req, &app.db),

        ("POST", "/graphql") => app.proxy.forward(&mut req),

        _ => static_files::serve(&app.static_root, &path),
    }
}
