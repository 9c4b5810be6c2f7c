use chrono::Utc;
use chrono_tz::Tz;
use sysinfo::{Components, System};

use crate::vitals::Reading;

const CPU_SENSOR_LABEL_PREFIX: &str = "coretemp";

#[derive(Debug)]
pub struct Sampler {
    system: System,
    components: Components,
}

impl Sampler {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            components: Components::new_with_refreshed_list(),
        }
    }

    pub fn sample(&mut self, timezone: Tz) -> Reading {
        self.system.refresh_memory();
        self.components.refresh();

        let sampled_at = Utc::now().with_timezone(&timezone);

        let cpu_temperature_celsius = self
            .components
            .iter()
            .find(|c| c.label().starts_with(CPU_SENSOR_LABEL_PREFIX))
            .map(|c| c.temperature());

        let total = self.system.total_memory();
        let ram_used_percent = if total == 0 {
            0.0
        } else {
            self.system.used_memory() as f32 / total as f32 * 100.0
        };

        Reading {
            sampled_at,
            cpu_temperature_celsius,
            ram_used_percent,
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
