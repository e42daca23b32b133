//! Server configuration
//!
//! Bind address, routing service connection and simulation tuning.

use std::time::Duration;

use waypoint_routing::DEFAULT_OSRM_URL;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server listens on (e.g., "0.0.0.0:5000")
    pub bind_addr: String,

    /// Base URL of the OSRM routing service
    pub osrm_url: String,

    /// Maximum time a routing request may take
    pub route_timeout: Duration,

    /// Period of the runner movement simulation
    pub simulation_interval: Duration,

    /// Maximum per-axis runner offset per tick, in degrees
    pub simulation_jitter: f64,
}

impl Config {
    /// Creates configuration from environment variables
    ///
    /// Every variable is optional:
    /// - WAYPOINT_BIND_ADDR (default: 0.0.0.0:5000)
    /// - OSRM_URL (default: public OSRM server)
    /// - ROUTE_TIMEOUT (seconds, default: 10)
    /// - SIMULATION_INTERVAL (seconds, default: 3)
    /// - SIMULATION_JITTER (degrees, default: 0.0005)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let bind_addr = lookup("WAYPOINT_BIND_ADDR").unwrap_or(defaults.bind_addr);
        let osrm_url = lookup("OSRM_URL").unwrap_or(defaults.osrm_url);

        let route_timeout = match lookup("ROUTE_TIMEOUT") {
            Some(s) => Duration::from_secs(
                s.parse()
                    .map_err(|_| anyhow::anyhow!("ROUTE_TIMEOUT must be a number of seconds"))?,
            ),
            None => defaults.route_timeout,
        };

        let simulation_interval = match lookup("SIMULATION_INTERVAL") {
            Some(s) => Duration::from_secs(s.parse().map_err(|_| {
                anyhow::anyhow!("SIMULATION_INTERVAL must be a number of seconds")
            })?),
            None => defaults.simulation_interval,
        };

        let simulation_jitter = match lookup("SIMULATION_JITTER") {
            Some(s) => s
                .parse()
                .map_err(|_| anyhow::anyhow!("SIMULATION_JITTER must be a number of degrees"))?,
            None => defaults.simulation_jitter,
        };

        Ok(Self {
            bind_addr,
            osrm_url,
            route_timeout,
            simulation_interval,
            simulation_jitter,
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if !self.osrm_url.starts_with("http://") && !self.osrm_url.starts_with("https://") {
            anyhow::bail!("osrm_url must start with http:// or https://");
        }

        if self.route_timeout.is_zero() {
            anyhow::bail!("route_timeout must be greater than 0");
        }

        if self.simulation_interval.is_zero() {
            anyhow::bail!("simulation_interval must be greater than 0");
        }

        if !self.simulation_jitter.is_finite() || self.simulation_jitter <= 0.0 {
            anyhow::bail!("simulation_jitter must be a positive number");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            osrm_url: DEFAULT_OSRM_URL.to_string(),
            route_timeout: Duration::from_secs(10),
            simulation_interval: Duration::from_secs(3),
            simulation_jitter: 0.0005,
        }
    }
}
