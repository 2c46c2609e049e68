//! Database initialization, migration, and connection management.

use crate::DbResult;
use sqlx::{SqlitePool, migrate::Migrator, sqlite::SqlitePoolOptions};
use std::{
    env,
    fs::OpenOptions,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tokio::sync::OnceCell;
use tracing::warn;
use url::Url;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const DB_ENV: &str = "SF_DB_URL";

static FORUM_DB: OnceCell<DbHandle> = OnceCell::const_new();

/// Pooled connection plus provenance for the forum database.
#[derive(Clone, Debug)]
pub struct DbHandle {
    pub pool: SqlitePool,
    pub url: String,
    pub path: Option<PathBuf>,
    pub freshly_created: bool,
}

impl DbHandle {
    pub fn into_pool(self) -> SqlitePool {
        self.pool
    }
}

/// Return a human-friendly string describing where the forum DB will live.
/// Prefers a filesystem path when available, otherwise returns the configured URL.
pub fn display_db_path() -> String {
    if let Ok(val) = env::var(DB_ENV) {
        return val;
    }
    default_db_path().display().to_string()
}

/// Establish the pooled SQLite connection for forum state.
pub async fn forum_db() -> DbResult<DbHandle> {
    let handle = FORUM_DB
        .get_or_try_init(|| async {
            let location = resolve_location().await?;
            init_pool(location).await
        })
        .await?;
    Ok(handle.clone())
}

/// Apply the migrations to the provided pool.
pub async fn migrate(handle: &DbHandle) -> DbResult<()> {
    MIGRATOR.run(&handle.pool).await?;
    if handle.freshly_created {
        warn!(db = %display_path(handle), "initialized forum database and applied migrations");
    }
    Ok(())
}

struct DbLocation {
    url: String,
    path: Option<PathBuf>,
    freshly_created: bool,
}

async fn resolve_location() -> DbResult<DbLocation> {
    if let Ok(value) = env::var(DB_ENV) {
        if value.starts_with("sqlite:") {
            return Ok(DbLocation {
                url: value,
                path: None,
                freshly_created: false,
            });
        }
        return build_location_from_path(PathBuf::from(value)).await;
    }

    build_location_from_path(default_db_path()).await
}

async fn build_location_from_path(path: PathBuf) -> DbResult<DbLocation> {
    let existed = tokio::fs::try_exists(&path).await.unwrap_or(false);
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| crate::DbError::DirectoryCreationFailed {
                path: parent.to_path_buf(),
                source: e,
            })?;
    }
    if !existed {
        // SQLx/SQLite can fail to create the file on some platforms unless it
        // exists already, so create it explicitly with 0600 where possible.
        let path_clone = path.clone();
        tokio::task::spawn_blocking(move || {
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                let mut options = OpenOptions::new();
                options.create_new(true).write(true).mode(0o600);
                match options.open(&path_clone) {
                    Ok(_) => Ok(()),
                    Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
                    Err(err) => Err(crate::DbError::FileCreationFailed {
                        path: path_clone.clone(),
                        source: err,
                    }),
                }
            }
            #[cfg(not(unix))]
            {
                let mut options = OpenOptions::new();
                options.create_new(true).write(true);
                match options.open(&path_clone) {
                    Ok(_) => Ok(()),
                    Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
                    Err(err) => Err(crate::DbError::FileCreationFailed {
                        path: path_clone.clone(),
                        source: err,
                    }),
                }
            }
        })
        .await
        .map_err(|e| crate::DbError::TaskPanicked(e.to_string()))??;
    }
    let url = sqlite_url_from_path(&path)?;
    Ok(DbLocation {
        url,
        path: Some(path),
        freshly_created: !existed,
    })
}

fn sqlite_url_from_path(path: &Path) -> DbResult<String> {
    let url = Url::from_file_path(path).map_err(|_| crate::DbError::InvalidPath(path.to_path_buf()))?;
    let mut url_string: String = url.into();
    url_string.replace_range(..4, "sqlite");
    Ok(url_string)
}

async fn init_pool(location: DbLocation) -> DbResult<DbHandle> {
    let max_connections = env::var("SF_DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(8);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(&location.url)
        .await
        .map_err(|e| crate::DbError::ConnectionFailed {
            path: location.url.clone(),
            source: e,
        })?;

    Ok(DbHandle {
        pool,
        url: location.url,
        path: location.path,
        freshly_created: location.freshly_created,
    })
}

fn default_db_path() -> PathBuf {
    preferred_data_dir().join("studyforum").join("forum.db")
}

fn preferred_data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| fallback_home().join(".local/share"))
}

fn fallback_home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

pub fn display_path(handle: &DbHandle) -> String {
    handle
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| handle.url.clone())
}
