use std::sync::Arc;
use std::time::Duration;

pub struct AppState<P> {
    pub provider: Arc<P>,
    pub upstream_timeout: Duration,
}

impl<P> Clone for AppState<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            upstream_timeout: self.upstream_timeout,
        }
    }
}
