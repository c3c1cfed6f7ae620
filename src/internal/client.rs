pub mod ieso_client;
