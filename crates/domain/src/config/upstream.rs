use serde::{Deserialize, Serialize};

/// Resolver worker pool reachable over HTTP.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URLs of the worker instances, e.g. `http://10.0.0.5:8080`.
    #[serde(default)]
    pub instances: Vec<String>,

    /// Fan-out breadth: how many candidate instances the selector
    /// considers before returning one.
    #[serde(default = "default_fan_out")]
    pub fan_out: usize,

    #[serde(default)]
    pub strategy: SelectionStrategy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    #[default]
    Random,
    RoundRobin,
}

fn default_fan_out() -> usize {
    3
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            instances: Vec::new(),
            fan_out: default_fan_out(),
            strategy: SelectionStrategy::default(),
        }
    }
}
