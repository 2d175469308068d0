use chrono::NaiveDateTime;

/// Authenticated user as exposed to handlers and templates.
///
/// Deliberately omits the password hash held by the database model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
