use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};

/// Shared r2d2 pool, cloned cheaply into each actix worker.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Connections are held per actix worker plus headroom for blocking
/// repository calls; commits and transitions each borrow one briefly.
const POOL_MAX_SIZE: u32 = 16;

pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(POOL_MAX_SIZE)
        .build(manager)
        .expect("Failed to create database connection pool")
}
