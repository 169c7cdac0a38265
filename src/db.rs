//! SQLite connection pooling helpers.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Connection pool shared across request handlers.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the pool to be
/// passed around freely between handlers.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// A single connection checked out of the [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Enables SQLite pragmas on every pooled connection.
///
/// Foreign key enforcement is off by default in SQLite; without it the
/// `ON DELETE CASCADE` on `topics.category_id` is silently ignored. The
/// busy timeout keeps concurrent writers from failing immediately with
/// `SQLITE_BUSY`.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a connection pool for the given SQLite database path or URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)
}
