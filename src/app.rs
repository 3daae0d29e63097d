use crate::config::Config;
use crate::db::{init_db, Database};
use crate::errors::ServerError;
use crate::proxy::{GraphqlProxy, ReqwestUpstream, Upstream};
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a request handler needs, built once at startup and shared by
/// every worker.
#[derive(Clone)]
pub struct App {
    pub db: Database,
    pub proxy: GraphqlProxy,
    pub static_root: PathBuf,
}

impl App {
    pub fn new(db: Database, upstream: Arc<dyn Upstream>, static_root: impl Into<PathBuf>) -> Self {
        Self {
            db,
            proxy: GraphqlProxy::new(upstream),
            static_root: static_root.into(),
        }
    }

    /// Opens the database, applies the schema and sets up the upstream client.
    pub fn from_config(config: &Config) -> Result<Self, ServerError> {
        let db = Database::open(config.database_path.clone())?;
        init_db(&db)?;

        let upstream = ReqwestUpstream::new(config.graphql_upstream.clone())?;
        Ok(Self::new(db, Arc::new(upstream), config.static_root.clone()))
    }
}
