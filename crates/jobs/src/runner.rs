use crate::{KeepAliveJob, RateLimitSweepJob};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> tokio::task::JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(KeepAliveJob);
impl_spawnable_job!(RateLimitSweepJob);

fn spawn_job<J: SpawnableJob>(job: Option<J>, shutdown: &Option<CancellationToken>) {
    if let Some(job) = job {
        let job = match shutdown {
            Some(token) => job.with_cancellation(token.clone()),
            None => job,
        };
        Arc::new(job).start_job();
    }
}

/// Collects the optional background jobs and spawns them as detached
/// tasks, each wired to the shared shutdown token.
#[derive(Default)]
pub struct JobRunner {
    keep_alive: Option<KeepAliveJob>,
    rate_limit_sweep: Option<RateLimitSweepJob>,
    shutdown: Option<CancellationToken>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keep_alive(mut self, job: KeepAliveJob) -> Self {
        self.keep_alive = Some(job);
        self
    }

    pub fn with_rate_limit_sweep(mut self, job: RateLimitSweepJob) -> Self {
        self.rate_limit_sweep = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub fn start(self) {
        info!("Starting background job runner");

        spawn_job(self.keep_alive, &self.shutdown);
        spawn_job(self.rate_limit_sweep, &self.shutdown);

        info!("All background jobs started");
    }
}
