pub mod blob_fetcher;
