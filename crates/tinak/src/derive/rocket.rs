use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};

use crate::Error;

impl Error {
    /// HTTP status this error is reported with
    pub fn status(&self) -> Status {
        match self {
            Error::IncorrectData { .. } => Status::BadRequest,
            Error::EmailInUse => Status::Conflict,
            Error::TooManyPending => Status::ServiceUnavailable,
            Error::EmailFailed => Status::InternalServerError,
            Error::RenderFail => Status::InternalServerError,
            Error::InvalidToken => Status::NotFound,
            Error::ExpiredToken => Status::BadRequest,
            Error::RegistrationFailed => Status::InternalServerError,
            Error::UnknownUser => Status::Unauthorized,
            Error::InternalError => Status::InternalServerError,
        }
    }
}

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();

        // Serialize the error data structure into JSON.
        let mut body = json!(self);
        body["message"] = json!(self.to_string());
        let string = body.to_string();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), std::io::Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}
