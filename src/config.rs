use std::net::SocketAddr;
use std::str::FromStr;

const DEFAULT_DATABASE_URL: &str = "sqlite://tcm_termbase.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 运行配置，全部来自环境变量 (可由 .env 提供)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// 启动时是否写入初始词条
    pub seed_database: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_database: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Config::default();
        Self {
            database_url: lookup("DATABASE_URL")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.database_url),
            bind_addr: parse_or("BIND_ADDR", lookup("BIND_ADDR"), defaults.bind_addr),
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                lookup("DB_MAX_CONNECTIONS"),
                defaults.max_connections,
            ),
            seed_database: lookup("SEED_DATABASE")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_database),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("环境变量 {}={:?} 无法解析，使用默认值", key, value);
            default
        }),
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
