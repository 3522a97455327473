/// SMTP mail server configuration
#[derive(Serialize, Deserialize, Clone)]
pub struct SMTPSettings {
    /// Sender address
    pub from: String,

    /// Reply-To address
    pub reply_to: Option<String>,

    /// SMTP host
    pub host: String,

    /// SMTP port
    pub port: Option<u16>,

    /// SMTP username
    pub username: String,

    /// SMTP password
    pub password: String,

    /// Whether to use STARTTLS
    pub use_tls: Option<bool>,
}

impl std::fmt::Debug for SMTPSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SMTPSettings")
            .field("from", &self.from)
            .field("reply_to", &self.reply_to)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("use_tls", &self.use_tls)
            .finish()
    }
}

/// Email template
///
/// Templates are rendered with Handlebars and receive
/// `url`, `username` and `minutes` as variables.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Template {
    /// Title of the email
    pub title: String,
    /// Plain text version of this email
    pub text: String,
    /// HTML version of this email
    pub html: Option<String>,
}

/// Email templates
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Templates {
    /// Template for email verification
    pub verify: Template,
}

impl Default for Templates {
    fn default() -> Templates {
        Templates {
            verify: Template {
                title: "Verify your TinakAward account".into(),
                text: "Hello {{username}},\n\n\
                       Thanks for signing up to TinakAward. Open the link below to verify your email and finish your registration:\n\n\
                       {{url}}\n\n\
                       This link expires in {{minutes}} minutes. If you did not request this, you can ignore this email.\n\n\
                       The TinakAward team"
                    .into(),
                html: Some(
                    "<p>Hello {{username}},</p>\
                     <p>Thanks for signing up to TinakAward. Click the link below to verify your email and finish your registration:</p>\
                     <p><a href=\"{{url}}\">Verify account</a></p>\
                     <p>This link expires in {{minutes}} minutes.</p>\
                     <p>If you did not request this, you can ignore this email.</p>\
                     <p>The TinakAward team</p>"
                        .into(),
                ),
            },
        }
    }
}

/// Email expiration config
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct EmailExpiryConfig {
    /// How long email verification tokens should last for (in seconds)
    pub expire_verification: u64,
}

impl Default for EmailExpiryConfig {
    fn default() -> EmailExpiryConfig {
        EmailExpiryConfig {
            expire_verification: 3600,
        }
    }
}

/// Email verification config
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct EmailVerificationConfig {
    /// Mail server used to deliver verification links
    ///
    /// When absent, mail is kept in an in-memory outbox and logged.
    pub smtp: Option<SMTPSettings>,
    /// Email templates
    pub templates: Templates,
    /// Token lifetimes
    pub expiry: EmailExpiryConfig,
}
