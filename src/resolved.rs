use serde::Serialize;

/// Job submission options with every default filled in.
///
/// Produced by [`JobOptions::load`](crate::JobOptions::load). Nothing here is
/// computed lazily, so a value can be shared freely between submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedJobOptions {
    endpoint: String,
    job_name: String,
    container_image: String,
    experiments: Vec<String>,
    r#async: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    internal_java_runner: Option<String>,
}

impl ResolvedJobOptions {
    pub(crate) fn new(
        endpoint: String,
        job_name: String,
        container_image: String,
        experiments: Vec<String>,
        r#async: bool,
        internal_java_runner: Option<String>,
    ) -> Self {
        Self {
            endpoint,
            job_name,
            container_image,
            experiments,
            r#async,
            internal_java_runner,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn container_image(&self) -> &str {
        &self.container_image
    }

    pub fn experiments(&self) -> &[String] {
        &self.experiments
    }

    pub fn has_experiment(&self, name: &str) -> bool {
        self.experiments.iter().any(|e| e == name)
    }

    pub fn is_async(&self) -> bool {
        self.r#async
    }

    pub fn internal_java_runner(&self) -> Option<&str> {
        self.internal_java_runner.as_deref()
    }
}
