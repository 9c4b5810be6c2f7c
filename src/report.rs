use crate::vitals::Reading;

const TIMESTAMP_FORMAT: &str = "%m-%d %H:%M:%S";

pub fn encode_report(reading: &Reading) -> String {
    let timestamp = reading.sampled_at.format(TIMESTAMP_FORMAT);

    let temperature = match reading.cpu_temperature_celsius {
        Some(t) => format!("{t:.1}"),
        None => "None".to_string(),
    };

    format!(
        "Time: {timestamp}\nCPU: {temperature}\nRAM {:.1}%",
        reading.ram_used_percent
    )
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use chrono_tz::Tz;

    use super::*;

    fn reading(cpu_temperature_celsius: Option<f32>, ram_used_percent: f32) -> Reading {
        let sampled_at = Tz::UTC.with_ymd_and_hms(2024, 3, 7, 21, 5, 9).unwrap();

        Reading {
            sampled_at,
            cpu_temperature_celsius,
            ram_used_percent,
        }
    }

    #[test]
    fn encodes_reading_with_temperature() {
        let report = encode_report(&reading(Some(45.25), 42.1));

        assert_eq!(report, "Time: 03-07 21:05:09\nCPU: 45.2\nRAM 42.1%");
    }

    #[test]
    fn encodes_missing_temperature_as_none() {
        let report = encode_report(&reading(None, 87.5));

        assert_eq!(report, "Time: 03-07 21:05:09\nCPU: None\nRAM 87.5%");
    }

    #[test]
    fn report_has_no_trailing_delimiter() {
        let report = encode_report(&reading(Some(30.0), 10.0));

        assert!(!report.ends_with('\n'));
    }
}
