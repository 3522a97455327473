use rocket::Route;
use rocket_okapi::okapi::openapi3::OpenApi;

pub mod account;
pub mod clients;
pub mod session;

/// Simple acknowledgement
#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Eq)]
pub struct ResponseMessage {
    /// Human readable message
    pub message: String,
}

impl ResponseMessage {
    pub fn new(message: &str) -> Self {
        ResponseMessage {
            message: message.to_string(),
        }
    }
}

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        account::register_initiate::register_initiate,
        account::resend_verification::resend_verification,
        account::verify_email::verify_email,
        session::login::login,
        clients::fetch_clients::fetch_clients
    ]
}
