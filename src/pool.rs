//! Process-wide executor pool shared by requests and downloads
//!
//! The pool owns the tokio runtime and the default transport client. It is
//! initialized exactly once, explicitly: using it before [`init`] or
//! calling [`init`] twice fails fast with a [`PoolError`] instead of
//! falling back to an ad-hoc client.

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

use crate::config::FetchConfig;
use crate::error::PoolError;

static POOL: Mutex<Option<Arc<ExecutorPool>>> = Mutex::new(None);

/// Shared runtime and default transport client.
#[derive(Debug)]
pub struct ExecutorPool {
    runtime: Runtime,
    client: reqwest::Client,
}

impl ExecutorPool {
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Spawns a task onto the pool's runtime.
    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.runtime.spawn(future)
    }

    /// Runs a future to completion on the pool, blocking the calling thread.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

/// Initializes the process-wide pool from the given configuration.
pub fn init(config: &FetchConfig) -> Result<(), PoolError> {
    let mut slot = POOL.lock().expect("pool lock poisoned");
    if slot.is_some() {
        return Err(PoolError::AlreadyInitialized);
    }
    let runtime = Builder::new_multi_thread()
        .worker_threads(config.workers)
        .thread_name("repofetch-pool")
        .enable_all()
        .build()
        .map_err(|e| PoolError::Build(e.to_string()))?;
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| PoolError::Build(e.to_string()))?;
    *slot = Some(Arc::new(ExecutorPool { runtime, client }));
    Ok(())
}

/// Returns a handle to the initialized pool.
pub fn handle() -> Result<Arc<ExecutorPool>, PoolError> {
    POOL.lock()
        .expect("pool lock poisoned")
        .clone()
        .ok_or(PoolError::NotInitialized)
}

/// Tears the pool down. Tasks still running are allowed to finish in the
/// background; a later [`init`] builds a fresh pool.
pub fn shutdown() -> Result<(), PoolError> {
    let pool = POOL
        .lock()
        .expect("pool lock poisoned")
        .take()
        .ok_or(PoolError::NotInitialized)?;
    // Outstanding handles keep the runtime alive until they drop.
    if let Ok(pool) = Arc::try_unwrap(pool) {
        pool.runtime.shutdown_background();
    }
    Ok(())
}
