pub mod error;
pub mod response;
pub mod variable_fetcher;
