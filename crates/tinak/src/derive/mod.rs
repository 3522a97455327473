#[cfg(feature = "rocket_impl")]
mod rocket;

#[cfg(feature = "okapi")]
mod okapi;
