pub mod tech;
pub mod user;
pub mod user_tech;

/*
 Users and techs are many-to-many. The link lives in user_techs and carries no data
 beyond its timestamps, so a user "knowing" a tech is just a row there.
 Techs are shared by name: two users adding "Rust" point at the same tech row.
 */
