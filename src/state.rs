use sea_orm::DatabaseConnection;

/// Per-request handler context. The connection is a pooled SeaORM handle;
/// handlers that mutate open an explicit transaction on it.
#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
}
