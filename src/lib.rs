// src/lib.rs

pub mod voice;

pub use voice::{
    Agent, AgentStatus, CompletionReason, Coordinator, CoordinatorConfig, CoordinatorError,
    StatusSnapshot, SubmitResult, VoiceRequest,
};
