use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,

    // Upstream data sources
    pub weather_api_url: String,
    pub quote_api_url: String,
    pub fetch_timeout_secs: u64,

    // Capture location for weather lookups
    pub default_city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),

            weather_api_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".into()),
            quote_api_url: env::var("QUOTE_API_URL")
                .unwrap_or_else(|_| "https://zenquotes.io/api/today".into()),
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .unwrap_or_else(|_| "5".into())
                .parse()
                .unwrap_or(5),

            default_city: env::var("DEFAULT_CITY")
                .unwrap_or_else(|_| "Waltham Forest".into()),
            latitude: env::var("WEATHER_LATITUDE")
                .unwrap_or_else(|_| "51.5074".into())
                .parse()
                .expect("WEATHER_LATITUDE must be a number"),
            longitude: env::var("WEATHER_LONGITUDE")
                .unwrap_or_else(|_| "0.1278".into())
                .parse()
                .expect("WEATHER_LONGITUDE must be a number"),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
