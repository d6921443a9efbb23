mod server;

pub use server::{ServerConfig, StorageBackend};
pub use server::{
    ENV_CONFIG_PATH, ENV_DATABASE_PATH, ENV_HOST, ENV_LOG_DIR, ENV_PORT, ENV_STORAGE,
};
