use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_url_from_env: bool,
    pub database_name: String,
    pub host: String,
    pub port: u16,
    pub pool_max_size: u32,
    pub upload_dir: PathBuf,
    pub files_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "blacklabel".to_string());

        // Use DATABASE_URL if provided, otherwise build it from individual fields
        let (database_url, database_url_from_env) = if let Ok(url) = env::var("DATABASE_URL") {
            (url, true)
        } else {
            let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_user = env::var("DB_USER").unwrap_or_else(|_| "blacklabel".to_string());
            let db_password = env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string());

            // URL-encode password to handle special characters
            let encoded_password = urlencoding::encode(&db_password);

            (
                format!(
                    "postgres://{}:{}@{}:{}/{}",
                    db_user, encoded_password, db_host, db_port, database_name
                ),
                false,
            )
        };

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);

        let pool_max_size = env::var("POOL_MAX_SIZE")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"));

        let files_base_url = env::var("FILES_BASE_URL")
            .unwrap_or_else(|_| "https://files.local".to_string());

        Ok(Config {
            database_url,
            database_url_from_env,
            database_name,
            host,
            port,
            pool_max_size,
            upload_dir,
            files_base_url,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address: {}", e))
    }
}
