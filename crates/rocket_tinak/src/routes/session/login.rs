//! Login to an account
//! POST /api/login
use rocket::serde::json::Json;
use rocket::State;
use tinak::models::{Account, PublicAccount};
use tinak::{Result, Tinak};

/// # Login Data
#[derive(Serialize, Deserialize, JsonSchema)]
pub struct DataLogin {
    /// Email of a verified account
    pub email: Option<String>,
}

/// # Login Response
#[derive(Serialize, Deserialize, JsonSchema, Debug)]
pub struct ResponseLogin {
    /// Human readable message
    pub message: String,
    /// Logged in account
    pub user: PublicAccount,
}

/// # Login
///
/// Login to a verified account by email.
#[openapi(tag = "Session")]
#[post("/login", data = "<data>")]
pub async fn login(tinak: &State<Tinak>, data: Json<DataLogin>) -> Result<Json<ResponseLogin>> {
    let data = data.into_inner();
    let account = Account::login(tinak, data.email.as_deref().unwrap_or_default()).await?;

    info!("Login for {}", account.email);

    Ok(Json(ResponseLogin {
        message: "Login successful.".to_string(),
        user: account.to_public(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[rocket::async_test]
    async fn success() {
        let (tinak, _) = for_test();
        let account = create_account(&tinak, "ana@example.com", "client").await;
        let client = bootstrap_rocket_with_tinak(tinak.clone()).await;

        let res = client
            .post("/api/login")
            .header(ContentType::JSON)
            .body(json!({ "email": "ana@example.com" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let body = res.into_string().await.unwrap();
        let secret = tinak
            .vault
            .fetch_secret(&account.id)
            .await
            .unwrap()
            .expect("`SecretKey`");
        assert!(!body.contains(secret.expose()));

        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value["user"],
            json!({
                "id": account.id,
                "email": "ana@example.com",
                "username": "ana",
                "accountType": "client",
                "publicKey": account.public_key,
            })
        );
        assert_eq!(value["message"], "Login successful.");
    }

    #[rocket::async_test]
    async fn fail_unverified() {
        let (tinak, _) = for_test();
        PendingVerification::initiate(&tinak, "ana@example.com", "ana", "client")
            .await
            .unwrap();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client
            .post("/api/login")
            .header(ContentType::JSON)
            .body(json!({ "email": "ana@example.com" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Unauthorized);

        let body: serde_json::Value =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(body["type"], "UnknownUser");
    }

    #[rocket::async_test]
    async fn fail_missing_email() {
        let (tinak, _) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client
            .post("/api/login")
            .header(ContentType::JSON)
            .body("{}")
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);
    }
}
