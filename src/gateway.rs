use serde::{Deserialize, Serialize};

pub mod events;
pub mod factory;
pub mod logs;
pub mod memory;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum GatewayPublisherVia {
    Logs,
    Memory,
}

impl From<String> for GatewayPublisherVia {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" => GatewayPublisherVia::Memory,
            _ => GatewayPublisherVia::Logs,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::gateway::GatewayPublisherVia;

    #[tokio::test]
    async fn test_should_parse_publisher_via() {
        assert_eq!(GatewayPublisherVia::Memory, GatewayPublisherVia::from(" Memory ".to_string()));
        assert_eq!(GatewayPublisherVia::Logs, GatewayPublisherVia::from("logs".to_string()));
        assert_eq!(GatewayPublisherVia::Logs, GatewayPublisherVia::from("sns".to_string()));
    }
}
