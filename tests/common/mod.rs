//! Helpers for integration tests.

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use inventory_management::db::{DbPool, establish_connection_pool};
use inventory_management::domain::auth::AuthenticatedUser;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Migrated SQLite database living in its own temporary directory.
///
/// The directory, and with it the WAL and SHM side files, is removed on drop.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temporary directory.");
        let path = dir.path().join("test.db");
        let database_url = path.to_str().expect("Temporary path is not UTF-8.");

        let pool = establish_connection_pool(database_url)
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb {
            path,
            pool,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[allow(dead_code)]
pub fn session_user(id: i32, role: &str) -> AuthenticatedUser {
    AuthenticatedUser {
        id,
        email: format!("user{id}@example.com"),
        name: format!("User {id}"),
        roles: vec![role.to_string()],
    }
}
