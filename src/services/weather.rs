//! Open-Meteo client for current conditions and the 7-day forecast.
//!
//! The analysis core never calls this module; weather is captured once
//! per check-in and stored alongside the entry.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::FetchError;
use crate::config::Config;

#[derive(Debug, Clone, Serialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub rain: f64,
    pub snowfall: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation_sum: f64,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    current: CurrentFields,
}

#[derive(Debug, Deserialize)]
struct CurrentFields {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    wind_speed_10m: f64,
    rain: f64,
    snowfall: f64,
    apparent_temperature: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyFields,
}

#[derive(Debug, Deserialize)]
struct DailyFields {
    time: Vec<NaiveDate>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_sum: Vec<f64>,
}

pub async fn fetch_current(
    client: &reqwest::Client,
    config: &Config,
) -> Result<CurrentWeather, FetchError> {
    let response = client
        .get(&config.weather_api_url)
        .query(&[
            ("latitude", config.latitude.to_string()),
            ("longitude", config.longitude.to_string()),
            (
                "current",
                "temperature_2m,relative_humidity_2m,rain,snowfall,wind_speed_10m,apparent_temperature"
                    .to_string(),
            ),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: CurrentResponse = response.json().await?;
    let current = body.current;

    Ok(CurrentWeather {
        temperature: current.temperature_2m,
        feels_like: current
            .apparent_temperature
            .unwrap_or(current.temperature_2m),
        humidity: current.relative_humidity_2m,
        wind_speed: current.wind_speed_10m,
        rain: current.rain,
        snowfall: current.snowfall,
    })
}

pub async fn fetch_forecast(
    client: &reqwest::Client,
    config: &Config,
) -> Result<Vec<DailyForecast>, FetchError> {
    let response = client
        .get(&config.weather_api_url)
        .query(&[
            ("latitude", config.latitude.to_string()),
            ("longitude", config.longitude.to_string()),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min,precipitation_sum".to_string(),
            ),
            ("forecast_days", "7".to_string()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let body: ForecastResponse = response.json().await?;
    let daily = body.daily;

    let mut days = Vec::with_capacity(daily.time.len());
    for (i, date) in daily.time.iter().enumerate() {
        let temperature_max = *daily
            .temperature_2m_max
            .get(i)
            .ok_or(FetchError::Malformed("daily series length mismatch"))?;
        let temperature_min = *daily
            .temperature_2m_min
            .get(i)
            .ok_or(FetchError::Malformed("daily series length mismatch"))?;
        let precipitation_sum = *daily
            .precipitation_sum
            .get(i)
            .ok_or(FetchError::Malformed("daily series length mismatch"))?;
        days.push(DailyForecast {
            date: *date,
            temperature_max,
            temperature_min,
            precipitation_sum,
        });
    }

    Ok(days)
}
