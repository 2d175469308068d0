//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_snippet_tables: bool,
    include_user_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String, String)>, // (name, email, password)
    snippets: Vec<(String, String, i64)>, // (title, content, expires_in_days)
    expired_snippets: Vec<(String, String)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_snippet_tables: false,
            include_user_tables: false,
            users: Vec::new(),
            snippets: Vec::new(),
            expired_snippets: Vec::new(),
        }
    }

    /// Add the snippet table to the test database.
    pub fn with_snippet_tables(mut self) -> Self {
        self.include_snippet_tables = true;
        self
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use snippetbox_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), snippetbox_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(entity::prelude::Snippet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with an Argon2-hashed password into the database.
    ///
    /// Implies `with_user_tables`.
    pub fn with_mock_user(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.include_user_tables = true;
        self.users.push((name.into(), email.into(), password.into()));
        self
    }

    /// Insert a snippet expiring `expires_in_days` from now.
    ///
    /// Implies `with_snippet_tables`.
    pub fn with_mock_snippet(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
        expires_in_days: i64,
    ) -> Self {
        self.include_snippet_tables = true;
        self.snippets
            .push((title.into(), content.into(), expires_in_days));
        self
    }

    /// Insert a snippet whose expiry is already in the past.
    ///
    /// Implies `with_snippet_tables`.
    pub fn with_expired_snippet(
        mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        self.include_snippet_tables = true;
        self.expired_snippets.push((title.into(), content.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (snippet & user tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users, snippets, expired snippets)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::PasswordHashError)` - Hashing a fixture user's password failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_snippet_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::Snippet));
        }

        if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::User));
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, email, password) in self.users {
            setup.user().insert_user(&name, &email, &password).await?;
        }

        for (title, content, expires_in_days) in self.snippets {
            setup
                .snippet()
                .insert_snippet(&title, &content, expires_in_days)
                .await?;
        }

        for (title, content) in self.expired_snippets {
            setup
                .snippet()
                .insert_expired_snippet(&title, &content)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
