//! Plain text errors for browser-navigated routes
use rocket::{
    http::ContentType,
    response::{self, Responder},
    Request, Response,
};
use rocket_okapi::{
    gen::OpenApiGenerator,
    okapi::openapi3::{self, MediaType, RefOr, Responses},
    response::OpenApiResponderInner,
};
use tinak::Error;

/// Error rendered as `text/plain`
#[derive(Debug, PartialEq, Eq)]
pub struct PlainError(pub Error);

impl From<Error> for PlainError {
    fn from(error: Error) -> Self {
        PlainError(error)
    }
}

impl<'r> Responder<'r, 'static> for PlainError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let string = self.0.to_string();

        Response::build()
            .sized_body(string.len(), std::io::Cursor::new(string))
            .header(ContentType::Plain)
            .status(self.0.status())
            .ok()
    }
}

impl OpenApiResponderInner for PlainError {
    fn responses(_gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        let mut content = rocket_okapi::okapi::Map::new();
        content.insert("text/plain".to_string(), MediaType::default());

        Ok(Responses {
            default: Some(RefOr::Object(openapi3::Response {
                content,
                description: "An error occurred, described in plain text.".to_string(),
                ..Default::default()
            })),
            ..Default::default()
        })
    }
}
