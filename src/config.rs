use {
    clap::Parser,
    sqlx::postgres::PgConnectOptions,
    std::net::{IpAddr, Ipv4Addr, SocketAddr},
};

/// Runtime settings, read from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-service", version, about = "Product catalog CRUD over HTTP")]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port the HTTP server binds to.
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    #[arg(long, env = "DB_PORT", default_value_t = 5432)]
    pub db_port: u16,

    #[arg(long, env = "DB_USER", default_value = "postgres")]
    pub db_user: String,

    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Database name, the server's default for the user when unset.
    #[arg(long, env = "DB_NAME")]
    pub db_name: Option<String>,

    /// Upper bound on pooled store connections.
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub db_max_connections: u32,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user);

        if let Some(password) = &self.db_password {
            options = options.password(password);
        }

        if let Some(name) = &self.db_name {
            options = options.database(name);
        }

        options
    }
}
