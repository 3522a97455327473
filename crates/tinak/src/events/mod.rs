use crate::models::Account;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "event_type")]
pub enum TinakEvent {
    CreatePendingVerification {
        email: String,
        username: String,
        account_type: String,
    },
    CreateAccount {
        account: Account,
    },
    ExpireVerifications {
        emails: Vec<String>,
    },
}
