mod account;
mod keypair;
mod pending;
mod secret;

pub use account::*;
pub use keypair::*;
pub use pending::*;
pub use secret::*;
