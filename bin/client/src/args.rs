use clap::Parser;
use std::time::Duration;
use thou_table::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal client for Thousanaire dice tables", long_about = None)]
pub struct Args {
    /// Game server address.
    #[arg(long, env = "THOUSANAIRE_ADDR", default_value = "127.0.0.1:3000")]
    pub addr: String,
    /// Quadrant tags of each screen slot, in screen order.
    #[arg(long, value_delimiter = ',', default_value = "top,right,bottom,left")]
    pub layout: Vec<String>,
    /// Interval between idle dice frames.
    #[arg(long = "idle-ms", default_value_t = 1500)]
    pub idle_ms: u64,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings::default()
            .with_layout(self.layout.iter())
            .with_idle_interval(Duration::from_millis(self.idle_ms))
    }
}
