//! # Request Processor
//!
//! Every request, from any number of producers, goes through one queue and is
//! applied by one task, start to finish, before the next is taken. This is
//! the serialization the gateway's registry semantics assume.

use super::requests::{handle_request, GatewayRequest};
use quorum_gateway::QuorumGatewayApi;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

/// Default number of queued requests before producers wait.
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// Processor errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessorError {
    /// The processing task has stopped.
    #[error("request processor is not running")]
    Stopped,
}

struct Job {
    request: GatewayRequest,
    reply: oneshot::Sender<Value>,
}

/// Cloneable producer side of the request queue.
#[derive(Clone)]
pub struct GatewayHandle {
    tx: mpsc::Sender<Job>,
}

impl GatewayHandle {
    /// Queue a request and wait for its response.
    pub async fn submit(&self, request: GatewayRequest) -> Result<Value, ProcessorError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Job { request, reply })
            .await
            .map_err(|_| ProcessorError::Stopped)?;
        response.await.map_err(|_| ProcessorError::Stopped)
    }
}

/// Start the single processing task.
///
/// The task exits once every `GatewayHandle` has been dropped.
pub fn spawn_processor<G>(gateway: Arc<G>, capacity: usize) -> (GatewayHandle, JoinHandle<()>)
where
    G: QuorumGatewayApi + 'static,
{
    let (tx, mut rx) = mpsc::channel::<Job>(capacity.max(1));

    let task = tokio::spawn(async move {
        while let Some(job) = rx.recv().await {
            let response = handle_request(gateway.as_ref(), job.request);
            // Caller may have given up waiting
            let _ = job.reply.send(response);
        }
        debug!("request processor stopped");
    });

    (GatewayHandle { tx }, task)
}
