pub mod fetch_clients;
