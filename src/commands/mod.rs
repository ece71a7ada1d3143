use thiserror::Error;

pub mod base_commands;
pub mod catalog_cmd;
pub mod report_format;
pub mod simulate_cmd;
pub mod template_cmd;

/// A command failure, rendered as `Failed to <action>: <cause>`.
#[derive(Error, Debug)]
#[error("Failed to {action}: {source}")]
pub struct CommandError {
    action: &'static str,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl CommandError {
    pub fn new<E>(action: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            action,
            source: Box::new(source),
        }
    }
}
