//! @ai:module:intent Courtesy pause between consecutive rows
//! @ai:module:layer infrastructure
//! @ai:module:public_api Pacer, FixedDelay
//! @ai:module:stateless true

use std::time::Duration;

/// @ai:intent Trait for pausing between rows
pub trait Pacer: Send + Sync {
    /// @ai:intent Wait before the next row is processed
    fn wait(&self) -> impl std::future::Future<Output = ()> + Send;
}

/// @ai:intent Sleeps for the same duration after every row
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// @ai:intent Create a pacer with a fixed delay
    /// @ai:effects pure
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Pacer for FixedDelay {
    /// @ai:intent Sleep for the configured delay; zero returns immediately
    /// @ai:effects time
    async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }

        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let pacer = FixedDelay::new(Duration::ZERO);

        let start = Instant::now();
        pacer.wait().await;

        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_waits_at_least_the_delay() {
        let pacer = FixedDelay::new(Duration::from_millis(100));

        let start = Instant::now();
        pacer.wait().await;

        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
