use chrono_tz::Tz;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "REPORT_ADDRESS", default_value = "192.168.1.88:1234")]
    pub address: String,

    #[arg(long, env = "TZ")]
    pub timezone: Tz,

    #[arg(long, default_value_t = 2)]
    pub interval_secs: u64,
}
