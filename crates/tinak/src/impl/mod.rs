mod account;
mod keypair;
mod pending;
mod reaper;
mod template;
