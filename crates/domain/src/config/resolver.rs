use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::Duration;

/// IPv4 root server addresses, current as of 21 Oct 2022 (a.root-servers.net
/// through m.root-servers.net). Order is the attempt order.
pub const ROOT_SERVERS: [Ipv4Addr; 13] = [
    Ipv4Addr::new(198, 41, 0, 4),
    Ipv4Addr::new(199, 9, 14, 201),
    Ipv4Addr::new(192, 33, 4, 12),
    Ipv4Addr::new(199, 7, 91, 13),
    Ipv4Addr::new(192, 203, 230, 10),
    Ipv4Addr::new(192, 5, 5, 241),
    Ipv4Addr::new(192, 112, 36, 4),
    Ipv4Addr::new(198, 97, 190, 53),
    Ipv4Addr::new(192, 36, 148, 17),
    Ipv4Addr::new(192, 58, 128, 30),
    Ipv4Addr::new(193, 0, 14, 129),
    Ipv4Addr::new(199, 7, 83, 42),
    Ipv4Addr::new(202, 12, 27, 33),
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_root_servers")]
    pub root_servers: Vec<Ipv4Addr>,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-exchange timeout in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    #[serde(default = "default_max_referral_depth")]
    pub max_referral_depth: usize,

    #[serde(default)]
    pub strategy: IterationStrategy,
}

impl ResolverConfig {
    pub fn query_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_servers: default_root_servers(),
            port: default_port(),
            query_timeout: default_query_timeout(),
            max_referral_depth: default_max_referral_depth(),
            strategy: IterationStrategy::default(),
        }
    }
}

/// How the root server list is walked for one (name, kind) pair.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IterationStrategy {
    /// One root at a time, in declared order.
    #[default]
    Sequential,

    /// All roots at once; the first success wins.
    Parallel,
}

impl IterationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Parallel => "parallel",
        }
    }
}

impl FromStr for IterationStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sequential" => Ok(Self::Sequential),
            "parallel" => Ok(Self::Parallel),
            _ => Err(format!("Unknown iteration strategy: {}", s)),
        }
    }
}

fn default_root_servers() -> Vec<Ipv4Addr> {
    ROOT_SERVERS.to_vec()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout() -> u64 {
    3
}

fn default_max_referral_depth() -> usize {
    16
}
