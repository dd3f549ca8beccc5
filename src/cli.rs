use clap::Parser;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "labelstub")]
#[command(version = "0.1.0")]
#[command(about = "Placeholder classifier serving random labels over HTTP", long_about = None)]
pub struct Cli {
    /// Config directory (reads default.toml and the LABELSTUB_ENV file)
    #[arg(short, long, env = "LABELSTUB_CONFIG_DIR", default_value = "config")]
    pub config: String,

    /// Listener port, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Fixed RNG seed for reproducible labels, overrides model.seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the simulated training delay
    #[arg(long)]
    pub no_warmup: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(seed) = self.seed {
            config.model.seed = Some(seed);
        }
        if self.no_warmup {
            config.model.warmup_secs = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["labelstub"]).unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.model.warmup_secs, 2);
        assert!(config.model.seed.is_none());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "labelstub",
            "--port",
            "9000",
            "--seed",
            "11",
            "--no-warmup",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.model.seed, Some(11));
        assert_eq!(config.model.warmup_secs, 0);
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(Cli::try_parse_from(["labelstub", "--port", "70000"]).is_err());
    }
}
