pub mod error;
pub mod response;
pub mod tech;
pub mod user;
