pub use super::snippet::Entity as Snippet;
pub use super::user::Entity as User;
