//! Ordered-fallback connection logic
//!
//! One attempt per credential strategy, most specific first. The first
//! connection that answers a PING wins; there are no retries and no backoff
//! beyond that list.

use redis::aio::ConnectionManager;
use redis::Client;
use tracing::{debug, warn};

use crate::config::{AuthStrategy, SeederConfig};
use crate::{SeedResult, SeederError};

/// One failed connection attempt, kept for the final diagnostic
#[derive(Debug, Clone)]
pub struct ConnectAttempt {
    pub strategy: AuthStrategy,
    pub error: String,
}

/// Try every strategy in [`AuthStrategy::FALLBACK_ORDER`] and return the
/// first live connection together with the strategy that produced it.
///
/// Returns [`SeederError::Connection`] carrying the full attempt log when
/// every strategy fails.
pub async fn connect_with_fallback(
    config: &SeederConfig,
) -> SeedResult<(ConnectionManager, AuthStrategy)> {
    let mut attempts = Vec::with_capacity(AuthStrategy::FALLBACK_ORDER.len());

    for strategy in AuthStrategy::FALLBACK_ORDER {
        println!("  Trying {}...", strategy.label());

        match try_connect(config, strategy).await {
            Ok(conn) => {
                debug!(
                    url = %config.display_url_for(strategy),
                    "Redis connection established"
                );
                return Ok((conn, strategy));
            }
            Err(err) => {
                let error = err.to_string();
                println!("  ✗ {} failed: {}", strategy.label(), error);
                warn!(
                    strategy = strategy.label(),
                    url = %config.display_url_for(strategy),
                    %error,
                    "connection attempt failed"
                );
                attempts.push(ConnectAttempt { strategy, error });
            }
        }
    }

    Err(SeederError::Connection { attempts })
}

/// A single attempt: open a client, get a connection under the configured
/// timeout, and require a successful PING before declaring it live.
async fn try_connect(config: &SeederConfig, strategy: AuthStrategy) -> SeedResult<ConnectionManager> {
    let url = config.url_for(strategy);
    let client = Client::open(url.as_str())
        .map_err(|e| SeederError::Configuration(format!("Invalid Redis URL: {}", e)))?;

    let mut conn = tokio::time::timeout(
        config.connection_timeout,
        client.get_tokio_connection_manager(),
    )
    .await
    .map_err(|_| SeederError::Timeout)?
    .map_err(|e| SeederError::Backend(format!("Failed to connect to Redis: {}", e)))?;

    let _: String = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .map_err(|e| SeederError::Backend(format!("Redis ping failed: {}", e)))?;

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    // Points at a port nothing listens on, so every strategy is refused
    // quickly without needing a Redis instance.
    fn unreachable_config() -> SeederConfig {
        SeederConfig::builder()
            .host("127.0.0.1")
            .port(6390)
            .connection_timeout(Duration::from_secs(2))
            .build()
    }

    #[tokio::test]
    async fn test_all_strategies_fail_in_order() {
        let config = unreachable_config();

        let err = connect_with_fallback(&config).await.err().unwrap();
        match err {
            SeederError::Connection { attempts } => {
                let tried: Vec<AuthStrategy> = attempts.iter().map(|a| a.strategy).collect();
                assert_eq!(tried, AuthStrategy::FALLBACK_ORDER.to_vec());
                for attempt in &attempts {
                    assert!(!attempt.error.is_empty());
                }
            }
            other => panic!("expected Connection error, got {:?}", other),
        }
    }

    #[tokio::test]
    #[ignore] // Requires a running Redis instance without auth
    async fn test_fallback_reaches_open_instance() {
        let config = SeederConfig::builder()
            .host("127.0.0.1")
            .port(6379)
            .build();

        let (_conn, strategy) = connect_with_fallback(&config).await.unwrap();
        // An open instance rejects both credentialed strategies, so the
        // fallback has to walk the full order before it succeeds.
        assert_eq!(strategy, AuthStrategy::NoAuth);
    }
}
