use anyhow::{anyhow, Result};
use std::{env, fs, io::ErrorKind, path::Path, time::Duration};
use vdb_core::usecases::MAX_PAGE_LIMIT;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "venuedb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

pub struct Config {
    pub db: Db,
    pub catalog: Catalog,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::debug!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::debug!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }
}

pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u8,
    /// Upper bound for waiting on the database.
    pub conn_timeout: Duration,
}

pub struct Catalog {
    pub default_page_limit: u64,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, catalog } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
            connection_timeout,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool must not be empty"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
            conn_timeout: connection_timeout,
        };

        let raw::Catalog { default_page_limit } = catalog.unwrap_or_default();
        if !(1..=MAX_PAGE_LIMIT).contains(&default_page_limit) {
            return Err(anyhow!(
                "The default page limit must be within 1 and {MAX_PAGE_LIMIT}"
            ));
        }
        let catalog = Catalog { default_page_limit };

        Ok(Self { db, catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Result<Config> {
        Config::try_from(toml::from_str::<raw::Config>(toml)?)
    }

    #[test]
    fn use_defaults_for_missing_sections() {
        let cfg = parse("").unwrap();
        assert_eq!("venuedb.sqlite", cfg.db.conn_sqlite);
        assert_eq!(10, cfg.db.conn_pool_size);
        assert_eq!(20, cfg.catalog.default_page_limit);
    }

    #[test]
    fn reject_empty_pool() {
        let err = parse(
            r#"
[db]
connection-sqlite = "test.sqlite"
connection-pool-size = 0
connection-timeout = "5s"
"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn reject_out_of_range_page_limit() {
        for limit in [0, 101] {
            assert!(parse(&format!("[catalog]\ndefault-page-limit = {limit}\n")).is_err());
        }
        assert_eq!(
            100,
            parse("[catalog]\ndefault-page-limit = 100\n")
                .unwrap()
                .catalog
                .default_page_limit
        );
    }
}
