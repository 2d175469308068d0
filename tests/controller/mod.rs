mod ping;
mod snippet;
mod user;
