//! Data transfer objects
//!
//! - Request DTOs: the slices of GitHub webhook payloads the receiver reads
//! - Response DTOs: JSON shapes returned by the API

pub mod requests;
pub mod responses;

pub use requests::{
    GitHubUser, GitRef, PullRequestDelivery, PullRequestDetails, PushCommit, PushPayload, Pusher,
};
pub use responses::{EventResponse, HealthChecks, HealthResponse, ReadinessResponse};
