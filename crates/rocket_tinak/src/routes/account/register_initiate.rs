//! Start a registration
//! POST /api/register-initiate
use rocket::serde::json::Json;
use rocket::State;
use tinak::models::PendingVerification;
use tinak::{Result, Tinak};

use crate::routes::ResponseMessage;

/// # Registration Data
#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DataRegisterInitiate {
    /// Email to verify
    pub email: Option<String>,
    /// Display name
    pub username: Option<String>,
    /// Kind of account, e.g. `client`
    pub account_type: Option<String>,
}

/// # Register
///
/// Start a registration by emailing a verification link.
#[openapi(tag = "Account")]
#[post("/register-initiate", data = "<data>")]
pub async fn register_initiate(
    tinak: &State<Tinak>,
    data: Json<DataRegisterInitiate>,
) -> Result<Json<ResponseMessage>> {
    let data = data.into_inner();

    PendingVerification::initiate(
        tinak,
        data.email.as_deref().unwrap_or_default(),
        data.username.as_deref().unwrap_or_default(),
        data.account_type.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(ResponseMessage::new(
        "A verification email has been sent to your address. Please check your inbox.",
    )))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[rocket::async_test]
    async fn success() {
        let (tinak, outbox) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak.clone()).await;

        let res = client
            .post("/api/register-initiate")
            .header(ContentType::JSON)
            .body(
                json!({
                    "email": "ana@example.com",
                    "username": "ana",
                    "accountType": "client"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);
        assert!(res
            .into_string()
            .await
            .unwrap()
            .contains("A verification email has been sent"));

        let pending = tinak
            .database
            .find_pending_verification_by_email("ana@example.com")
            .await
            .unwrap()
            .expect("`PendingVerification`");

        let mail = outbox.last_mail_to("ana@example.com").await.expect("`Mail`");
        assert!(mail
            .text
            .contains(&format!("/api/verify-email?token={}", pending.token)));
    }

    #[rocket::async_test]
    async fn fail_missing_field() {
        let (tinak, _) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client
            .post("/api/register-initiate")
            .header(ContentType::JSON)
            .body(json!({ "email": "ana@example.com", "username": "ana" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);

        let body: serde_json::Value =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(body["type"], "IncorrectData");
        assert_eq!(body["with"], "accountType");
        assert!(body["message"].is_string());
    }

    #[rocket::async_test]
    async fn fail_duplicate_email() {
        let (tinak, _) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak.clone()).await;

        let body = json!({
            "email": "ana@example.com",
            "username": "ana",
            "accountType": "client"
        })
        .to_string();

        let res = client
            .post("/api/register-initiate")
            .header(ContentType::JSON)
            .body(&body)
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);

        let res = client
            .post("/api/register-initiate")
            .header(ContentType::JSON)
            .body(&body)
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Conflict);
        assert_eq!(tinak.database.count_pending_verifications().await, Ok(1));
    }

    #[rocket::async_test]
    async fn fail_email_not_sent() {
        let tinak = Tinak {
            mailer: Mailer::Custom(Arc::new(BrokenMailer)),
            ..Default::default()
        };
        let client = bootstrap_rocket_with_tinak(tinak.clone()).await;

        let res = client
            .post("/api/register-initiate")
            .header(ContentType::JSON)
            .body(
                json!({
                    "email": "ana@example.com",
                    "username": "ana",
                    "accountType": "client"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::InternalServerError);
        assert_eq!(tinak.database.count_pending_verifications().await, Ok(0));
    }

    #[rocket::async_test]
    async fn fail_malformed_body() {
        let (tinak, _) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client
            .post("/api/register-initiate")
            .header(ContentType::JSON)
            .body("{ not json")
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);
        assert_eq!(res.content_type(), Some(ContentType::JSON));
    }
}
