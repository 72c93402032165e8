//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain
//! objects. Inserts go through `RETURNING *`, so no separate insert structs
//! are needed.

mod category;
mod post;
mod profile;
mod thread;
mod user;
