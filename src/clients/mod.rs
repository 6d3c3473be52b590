pub mod discovery_client;
