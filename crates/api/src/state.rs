use notekeeper_db::DbPool;

/// State shared by every handler via `State<AppState>`.
///
/// Cloning is cheap; the pool is reference-counted. Server settings are
/// consumed once while building the router and are not needed per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}
