use chrono::DateTime;
use chrono_tz::Tz;

#[derive(Debug, Clone)]
pub struct Reading {
    pub sampled_at: DateTime<Tz>,

    pub cpu_temperature_celsius: Option<f32>,

    pub ram_used_percent: f32,
}
