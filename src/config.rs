use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        strapi_url: get_env_or_default("STRAPI_URL", "http://localhost:1337"),
        site_url: get_env_or_default("SITE_URL", "https://quickair.com"),
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:8080"),
    }
});

pub struct Config {
    /// Strapi base URL; the GraphQL endpoint lives at `{strapi_url}/graphql`.
    pub strapi_url: String,
    /// Public site origin, used to absolutize site-relative OG image paths.
    pub site_url: String,
    pub bind_addr: String,
}

impl Config {
    pub fn graphql_endpoint(&self) -> String {
        format!("{}/graphql", self.strapi_url.trim_end_matches('/'))
    }
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
