#[derive(Serialize, Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[serde(tag = "type")]
pub enum Error {
    #[error("The `{with}` field is missing or invalid.")]
    IncorrectData { with: &'static str },
    #[error("This email address is already registered.")]
    EmailInUse,
    #[error("Too many registrations are awaiting verification, try again later.")]
    TooManyPending,

    #[error("Failed to send the verification email, please try again.")]
    EmailFailed,
    #[error("Failed to render the email template.")]
    RenderFail,

    #[error("Verification token is invalid or has already been used.")]
    InvalidToken,
    #[error("Verification token has expired, please register again.")]
    ExpiredToken,
    #[error("Failed to complete the ledger registration, please try again.")]
    RegistrationFailed,

    #[error("Email address not found or not verified.")]
    UnknownUser,

    #[error("Internal error while completing the request.")]
    InternalError,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;
