//! Verify an email address
//! GET /api/verify-email?token=<token>
use rocket::response::Redirect;
use rocket::State;
use tinak::models::{Account, PendingVerification};
use tinak::Tinak;

use crate::plain::PlainError;

/// Where the browser lands once the account exists
pub fn success_redirect_uri(account: &Account) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("email", &account.email)
        .append_pair("accountType", &account.account_type)
        .append_pair("username", &account.username)
        .finish();

    format!("/success-redirect.html?{}", query)
}

/// # Verify Email
///
/// Consume a verification link, provisioning the account and its ledger keys.
#[openapi(tag = "Account")]
#[get("/verify-email?<token>")]
pub async fn verify_email(
    tinak: &State<Tinak>,
    token: Option<String>,
) -> Result<Redirect, PlainError> {
    let account =
        PendingVerification::consume(tinak, token.as_deref().unwrap_or_default()).await?;

    Ok(Redirect::to(success_redirect_uri(&account)))
}
