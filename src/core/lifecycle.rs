//! Server lifecycle: `Stopped → Listening → Draining → Stopped`.
//!
//! A service either serves until a shutdown future resolves and then drains
//! and releases its resources, or serves until the process is killed.

use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerPhase {
    Stopped,
    Listening,
    Draining,
}

struct CleanupStep {
    name: &'static str,
    release: Box<dyn FnOnce() + Send>,
}

/// Resource releases, run in reverse order of registration.
///
/// Each step runs at most once: `run` pops steps as it goes, and anything
/// still registered when the stack is dropped runs then.
#[derive(Default)]
pub struct CleanupStack {
    steps: Vec<CleanupStep>,
}

impl CleanupStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<F>(&mut self, name: &'static str, release: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.steps.push(CleanupStep {
            name,
            release: Box::new(release),
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn run(&mut self) {
        while let Some(step) = self.steps.pop() {
            debug!(resource = step.name, "releasing");
            (step.release)();
        }
    }
}

impl Drop for CleanupStack {
    fn drop(&mut self) {
        self.run();
    }
}

pub struct Lifecycle {
    phase: Arc<watch::Sender<ServerPhase>>,
    cleanup: CleanupStack,
}

impl Lifecycle {
    pub fn new(cleanup: CleanupStack) -> Self {
        let (phase, _) = watch::channel(ServerPhase::Stopped);
        Self {
            phase: Arc::new(phase),
            cleanup,
        }
    }

    pub fn phase(&self) -> ServerPhase {
        *self.phase.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<ServerPhase> {
        self.phase.subscribe()
    }

    /// Serve `router` until `shutdown` resolves, then stop accepting, let
    /// in-flight requests finish, and run the cleanup stack.
    pub async fn serve_with_shutdown<F>(
        mut self,
        listener: TcpListener,
        router: &Router,
        shutdown: F,
    ) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        self.phase.send_replace(ServerPhase::Listening);
        info!("listening on http://{}", addr);

        let phase = Arc::clone(&self.phase);
        let drain = async move {
            shutdown.await;
            phase.send_replace(ServerPhase::Draining);
            info!("Gracefully shutting down...");
        };

        let served = axum::serve(listener, router.clone())
            .with_graceful_shutdown(drain)
            .await
            .context("server terminated abnormally");

        info!("Running cleanup tasks...");
        self.cleanup.run();
        self.phase.send_replace(ServerPhase::Stopped);

        served?;
        info!("server on {} was successfully shut down", addr);
        Ok(())
    }

    /// Serve `router` with no drain phase; returns only on a serve error.
    pub async fn serve_until_killed(self, listener: TcpListener, router: &Router) -> Result<()> {
        let addr = listener.local_addr()?;
        self.phase.send_replace(ServerPhase::Listening);
        info!("listening on http://{}", addr);

        axum::serve(listener, router.clone())
            .await
            .context("server terminated abnormally")
    }
}
