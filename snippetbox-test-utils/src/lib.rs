pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_USER_EMAIL, TEST_USER_NAME, TEST_USER_PASSWORD},
        fixtures::{snippet::factory as snippet_factory, user::factory as user_factory},
        TestBuilder, TestContext, TestError,
    };
}
