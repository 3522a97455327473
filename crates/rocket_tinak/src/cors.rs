//! Permissive CORS headers on every response
use rocket::{
    fairing::{Fairing, Info, Kind},
    http::{Header, Status},
    Request, Response,
};

pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        // Reflect Origin when present
        let origin = request.headers().get_one("Origin").unwrap_or("*").to_string();

        response.set_header(Header::new("Access-Control-Allow-Origin", origin));
        response.set_header(Header::new("Vary", "Origin"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET,POST,OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            "Content-Type,Accept,X-Requested-With",
        ));
    }
}

/// Answer CORS preflight requests
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

#[cfg(test)]
mod tests {
    use rocket::http::Header;

    use crate::test::*;

    #[rocket::async_test]
    async fn preflight_is_answered() {
        let (tinak, _) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client
            .options("/api/register-initiate")
            .header(Header::new("Origin", "https://tinak.example"))
            .header(Header::new("Access-Control-Request-Method", "POST"))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NoContent);
        assert_eq!(
            res.headers().get_one("Access-Control-Allow-Origin"),
            Some("https://tinak.example")
        );
        assert!(res
            .headers()
            .get_one("Access-Control-Allow-Methods")
            .unwrap()
            .contains("POST"));
    }

    #[rocket::async_test]
    async fn headers_without_origin() {
        let (tinak, _) = for_test();
        let client = bootstrap_rocket_with_tinak(tinak).await;

        let res = client.get("/api/clients").dispatch().await;

        assert_eq!(res.status(), Status::Ok);
        assert_eq!(res.headers().get_one("Access-Control-Allow-Origin"), Some("*"));
    }
}
