// /users/{user_id}/techs
pub mod delete;
pub mod index;
pub mod store;

// /techs
pub mod list;
pub mod users;
