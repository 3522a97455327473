//! Resend a verification email
//! POST /api/resend-verification
use rocket::serde::json::Json;
use rocket::State;
use tinak::models::PendingVerification;
use tinak::{Result, Tinak};

use crate::routes::ResponseMessage;

/// # Resend Information
#[derive(Serialize, Deserialize, JsonSchema)]
pub struct DataResendVerification {
    /// Email of the unfinished registration
    pub email: Option<String>,
}

/// # Resend Verification
///
/// Issue a new verification link for an unfinished registration.
#[openapi(tag = "Account")]
#[post("/resend-verification", data = "<data>")]
pub async fn resend_verification(
    tinak: &State<Tinak>,
    data: Json<DataResendVerification>,
) -> Result<Json<ResponseMessage>> {
    let data = data.into_inner();

    // Do not reveal whether a registration exists for this email
    PendingVerification::resend(tinak, data.email.as_deref().unwrap_or_default()).await?;

    Ok(Json(ResponseMessage::new(
        "If a registration is awaiting verification, a new email has been sent.",
    )))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[rocket::async_test]
    async fn success() {
        let (tinak, outbox) = for_test();
        let first = PendingVerification::initiate(&tinak, "ana@example.com", "ana", "client")
            .await
            .unwrap();
        let client = bootstrap_rocket_with_tinak(tinak.clone()).await;

        let res = client
            .post("/api/resend-verification")
            .header(ContentType::JSON)
            .body(json!({ "email": "ana@example.com" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let mail = outbox.last_mail_to("ana@example.com").await.expect("`Mail`");
        assert!(!mail.text.contains(&first.token));

        let res = client
            .get(format!("/api/verify-email?token={}", first.token))
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::NotFound);
    }

    #[rocket::async_test]
    async fn success_unknown_email() {
        let (tinak, outbox) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client
            .post("/api/resend-verification")
            .header(ContentType::JSON)
            .body(json!({ "email": "nobody@example.com" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);
        assert!(outbox.mail.lock().await.is_empty());
    }

    #[rocket::async_test]
    async fn fail_missing_email() {
        let (tinak, _) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client
            .post("/api/resend-verification")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);
    }
}
