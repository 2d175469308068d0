pub mod prelude;

pub mod snippet;
pub mod user;
