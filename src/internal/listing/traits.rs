pub mod directory_provider;
