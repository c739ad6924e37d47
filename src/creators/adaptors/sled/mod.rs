mod sled_store;

pub use sled_store::*;

#[cfg(test)]
mod sled_store_test;

use std::io;

use tracing::debug;
use tracing::warn;

use crate::StorageConfig;

/// Opens the creator database under the configured root directory.
pub fn init_sled_creator_db(config: &StorageConfig) -> std::result::Result<sled::Db, io::Error> {
    debug!("init_sled_creator_db from path: {:?}", config.db_root_dir);

    let db_path = config.db_root_dir.join("creators");

    let mut sled_config = sled::Config::default()
        .path(&db_path)
        .cache_capacity(config.cache_capacity_bytes)
        .use_compression(true)
        .compression_factor(1);
    if let Some(ms) = config.flush_every_ms {
        sled_config = sled_config.flush_every_ms(Some(ms));
    }

    sled_config.open().map_err(|e| {
        warn!("Try to open DB at this location: {:?} and failed: {:?}", db_path, e);
        io::Error::other(e)
    })
}
