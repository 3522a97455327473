//! List client accounts
//! GET /api/clients
use rocket::serde::json::Json;
use rocket::State;
use tinak::models::{Account, PublicAccount};
use tinak::{Result, Tinak};

/// # Client List
#[derive(Serialize, Deserialize, JsonSchema, Debug)]
pub struct ResponseClients {
    /// Client accounts, oldest first
    pub clients: Vec<PublicAccount>,
}

/// # Fetch Clients
///
/// List every account registered as a client.
#[openapi(tag = "Clients")]
#[get("/clients")]
pub async fn fetch_clients(tinak: &State<Tinak>) -> Result<Json<ResponseClients>> {
    let clients = Account::fetch_clients(tinak)
        .await?
        .iter()
        .map(Account::to_public)
        .collect();

    Ok(Json(ResponseClients { clients }))
}
