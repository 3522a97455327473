//! Explicitly served static pages
use rocket::{fs::NamedFile, Route, State};

use crate::PublicDir;

/// Landing page after a successful verification
#[get("/success-redirect.html")]
pub async fn success_redirect(public_dir: &State<PublicDir>) -> Option<NamedFile> {
    NamedFile::open(public_dir.0.join("success-redirect.html"))
        .await
        .ok()
}

pub fn routes() -> Vec<Route> {
    routes![success_redirect, crate::cors::preflight]
}
