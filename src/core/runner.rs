use crate::core::Task;
use crate::utils::error::Result;
use std::time::Instant;

pub struct TaskRunner<T: Task> {
    task: T,
}

impl<T: Task> TaskRunner<T> {
    pub fn new(task: T) -> Self {
        Self { task }
    }

    /// Runs the task once and returns the text to print. Errors are logged and passed through.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting {}", self.task.name());

        match self.task.execute().await {
            Ok(output) => {
                tracing::info!("{} finished in {:?}", self.task.name(), started.elapsed());
                Ok(output)
            }
            Err(e) => {
                tracing::error!("{} failed after {:?}: {}", self.task.name(), started.elapsed(), e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ToolError;

    struct FixedTask(std::result::Result<&'static str, &'static str>);

    #[async_trait::async_trait]
    impl Task for FixedTask {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn execute(&self) -> Result<String> {
            match self.0 {
                Ok(text) => Ok(text.to_string()),
                Err(message) => Err(ToolError::InvalidDocument {
                    message: message.to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_run_returns_task_output() {
        let runner = TaskRunner::new(FixedTask(Ok("done\n")));
        assert_eq!(runner.run().await.unwrap(), "done\n");
    }

    #[tokio::test]
    async fn test_run_passes_error_through() {
        let runner = TaskRunner::new(FixedTask(Err("boom")));
        let err = runner.run().await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid document: boom");
    }
}
