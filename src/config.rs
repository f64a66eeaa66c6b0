use std::path::PathBuf;

use derivative::Derivative;

use crate::transport::{TransportSelector, DEFAULT_PORT, DEFAULT_SERVER, DEFAULT_TCP_THRESHOLD};

pub const DEFAULT_OUTPUT: &str = "output.txt";

#[derive(Derivative, Clone)]
#[derivative(Debug, Default)]
pub struct Config {
    /// Server queries are sent to; a `:` in it selects IPv6 for UDP
    #[derivative(Default(value = "DEFAULT_SERVER.to_owned()"))]
    pub server: String,

    #[derivative(Default(value = "DEFAULT_PORT"))]
    pub port: u16,

    /// Messages longer than this go over TCP
    #[derivative(Default(value = "DEFAULT_TCP_THRESHOLD"))]
    pub tcp_threshold: usize,

    /// Where results are appended when queries come from a file
    #[derivative(Default(value = "PathBuf::from(DEFAULT_OUTPUT)"))]
    pub output: PathBuf,
}

impl Config {
    pub fn selector(&self) -> TransportSelector {
        TransportSelector::new(self.tcp_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_to_cloudflare_on_port_53() {
        let config = Config::default();

        assert_eq!(config.server, "1.1.1.1");
        assert_eq!(config.port, 53);
        assert_eq!(config.tcp_threshold, 64);
        assert_eq!(config.output.to_str(), Some("output.txt"));
        assert_eq!(config.selector().tcp_threshold(), 64);
    }
}
