//! Domain types shared by the storage layer and the console

mod ids;
mod post;
mod user;

pub use ids::{PostId, UserId};
pub use post::{NewPost, Post};
pub use user::{NewUser, User};
