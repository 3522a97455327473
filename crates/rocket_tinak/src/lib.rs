#[macro_use]
extern crate serde;
#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate schemars;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

pub mod catchers;
pub mod cors;
pub mod pages;
pub mod plain;
pub mod routes;

#[cfg(test)]
pub mod test;

use std::path::PathBuf;

use rocket::fairing::AdHoc;
use rocket::fs::{FileServer, Options};
use rocket::{Build, Rocket};
use rocket_okapi::handlers::OpenApiHandler;
use rocket_okapi::okapi::openapi3::Server;
use tinak::{Config, Mailer, Tinak};

/// Directory holding the public static files
pub struct PublicDir(pub PathBuf);

impl Default for PublicDir {
    fn default() -> Self {
        PublicDir(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/public")))
    }
}

/// Mount the API, static files and supporting fairings
pub fn mount(rocket: Rocket<Build>, tinak: Tinak, public_dir: PublicDir) -> Rocket<Build> {
    let (routes, mut spec) = routes::routes();
    spec.servers = vec![Server {
        url: "/api".to_owned(),
        ..Default::default()
    }];

    let files = FileServer::new(&public_dir.0, Options::Index | Options::Missing);

    rocket
        .manage(tinak)
        .manage(public_dir)
        .mount("/api", routes)
        .mount(
            "/api",
            vec![OpenApiHandler::new(spec).into_route("/openapi.json")],
        )
        .mount("/", pages::routes())
        .mount("/", files)
        .register("/", catchers::catchers())
        .attach(cors::Cors)
        .attach(AdHoc::on_liftoff("Verification Reaper", |rocket| {
            Box::pin(async move {
                if let Some(tinak) = rocket.state::<Tinak>() {
                    rocket::tokio::spawn(tinak.clone().run_reaper());
                }
            })
        }))
}

/// Load configuration from the `tinak` figment key and mount everything
pub fn stage() -> AdHoc {
    AdHoc::try_on_ignite("Tinak", |rocket| async move {
        let figment = rocket.figment();

        let config: Config = match figment.find_value("tinak") {
            Ok(_) => match figment.extract_inner("tinak") {
                Ok(config) => config,
                Err(err) => {
                    error!("Invalid `tinak` configuration: {}", err);
                    return Err(rocket);
                }
            },
            Err(_) => {
                warn!("No `tinak` configuration found, using defaults.");
                Config::default()
            }
        };

        let public_dir = figment
            .extract_inner::<PathBuf>("public_dir")
            .map(PublicDir)
            .unwrap_or_default();

        let mailer = match Mailer::from_config(&config.email_verification) {
            Ok(mailer) => mailer,
            Err(err) => {
                error!("Failed to set up the mailer: {}", err);
                return Err(rocket);
            }
        };

        info!("Verification links point at {}", config.base_url);

        let tinak = Tinak {
            config,
            mailer,
            ..Default::default()
        };

        Ok(mount(rocket, tinak, public_dir))
    })
}
