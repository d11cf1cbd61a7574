/// Errors raised by [`crate::PromptEngine`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("Please provide a task description")]
    EmptyInput,
}
