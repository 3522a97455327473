//! JSON bodies for requests which never reach a route
use rocket::{http::Status, serde::json::Value, Catcher, Request};

#[catch(default)]
fn json_error(status: Status, _: &Request) -> (Status, Value) {
    let message = match status.code {
        400 => "The request could not be understood.",
        404 => "Not found.",
        422 => "The request body is malformed.",
        _ => status.reason().unwrap_or("Unknown error."),
    };

    (
        status,
        json!({
            "type": "HttpError",
            "status": status.code,
            "message": message,
        }),
    )
}

pub fn catchers() -> Vec<Catcher> {
    catchers![json_error]
}
