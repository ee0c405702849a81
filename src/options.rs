//! Raw job submission options and their lazy resolvers.
//!
//! [`JobOptions`] holds the values exactly as the command line supplied
//! them, with unset options left empty. The resolvers turn them into
//! concrete values: the job name and container image get a computed default
//! the first time they are read, and that default is written back so every
//! later read returns the same string.

use clap::Args;
use serde::{Deserialize, Serialize};
use tracing::Span;

use crate::env::{Environment, SystemEnvironment};
use crate::error::{JobOptionsError, Result};
use crate::resolved::ResolvedJobOptions;
use crate::utils::{non_empty, split_list};

/// Prefix of generated job names.
pub const JOB_NAME_PREFIX: &str = "go-job-";

/// Registry path and tag appended to the user name to form the dev image.
pub const DEV_CONTAINER_IMAGE_SUFFIX: &str = "-docker-apache.bintray.io/beam/go:latest";

/// Shared options for job submission.
///
/// Runners such as Dataflow may fill in an endpoint of their own before
/// resolution; otherwise `--endpoint` must be given.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOptions {
    /// Job service endpoint (required).
    #[arg(long, default_value = "", hide_default_value = true)]
    #[serde(default)]
    pub endpoint: String,

    /// Job name (optional).
    #[arg(long = "job_name", default_value = "", hide_default_value = true)]
    #[serde(default)]
    pub job_name: String,

    /// Container image
    #[arg(
        long = "container_image",
        default_value = "",
        hide_default_value = true
    )]
    #[serde(default)]
    pub container_image: String,

    /// Comma-separated list of experiments (optional).
    #[arg(long, default_value = "", hide_default_value = true)]
    #[serde(default)]
    pub experiments: String,

    /// Do not wait for job completion.
    #[arg(
        id = "async",
        long = "async",
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        hide_default_value = true,
        action = clap::ArgAction::Set
    )]
    #[serde(default)]
    pub r#async: bool,

    /// Internal java runner class.
    // Only needed by Java runners for now.
    #[arg(
        long = "internal_java_runner",
        default_value = "",
        hide_default_value = true
    )]
    #[serde(default)]
    pub internal_java_runner: String,
}

impl JobOptions {
    /// Returns the endpoint, or an error telling the user to pass
    /// `--endpoint` if none was given.
    pub fn endpoint(&self) -> Result<&str> {
        non_empty(&self.endpoint).ok_or_else(|| {
            JobOptionsError::missing(
                "endpoint",
                "no job service endpoint specified. Use --endpoint=<endpoint>",
            )
        })
    }

    /// Returns the job name, generating one from the system clock if unset.
    pub fn job_name(&mut self) -> &str {
        self.job_name_with(&SystemEnvironment)
    }

    /// Returns the job name, generating one from `env`'s clock if unset.
    ///
    /// The generated name is stored, so later calls return it unchanged.
    pub fn job_name_with(&mut self, env: &impl Environment) -> &str {
        if self.job_name.is_empty() {
            self.job_name = default_job_name(env);
        }
        &self.job_name
    }

    /// Returns the SDK harness container image, falling back to the dev
    /// image of the user in `$USER`.
    pub fn container_image(&mut self, ctx: &Span) -> &str {
        self.container_image_with(ctx, &SystemEnvironment)
    }

    /// Returns the SDK harness container image, falling back to the dev
    /// image of `env`'s current user.
    ///
    /// Choosing the fallback stores it and logs the chosen image once,
    /// inside `ctx`.
    pub fn container_image_with(&mut self, ctx: &Span, env: &impl Environment) -> &str {
        if self.container_image.is_empty() {
            self.container_image = default_container_image(env);
            ctx.in_scope(|| {
                tracing::info!(
                    container_image = %self.container_image,
                    "No container image specified. Using dev image: '{}'",
                    self.container_image
                );
            });
        }
        &self.container_image
    }

    /// Returns the enabled experiments in the order they were given.
    ///
    /// Recomputed from the raw value on every call.
    pub fn experiments(&self) -> Vec<String> {
        split_list(&self.experiments)
    }

    /// Whether `name` is one of the enabled experiments.
    pub fn has_experiment(&self, name: &str) -> bool {
        self.experiments().iter().any(|e| e == name)
    }

    /// Whether the submitter should return without waiting for the job.
    pub fn is_async(&self) -> bool {
        self.r#async
    }

    /// The legacy Java runner class; an empty value reads as `None`.
    pub fn internal_java_runner(&self) -> Option<&str> {
        non_empty(&self.internal_java_runner)
    }

    /// Resolves every option at once against the system environment.
    pub fn load(&self) -> Result<ResolvedJobOptions> {
        self.load_with(&SystemEnvironment)
    }

    /// Resolves every option at once against `env`.
    ///
    /// The endpoint is checked first, so a failed load computes no defaults
    /// and logs nothing. `self` is left untouched: each successful load
    /// computes its defaults afresh. Any container image diagnostic is
    /// emitted in the current span.
    pub fn load_with(&self, env: &impl Environment) -> Result<ResolvedJobOptions> {
        let endpoint = self.endpoint()?.to_string();
        let mut raw = self.clone();
        let job_name = raw.job_name_with(env).to_string();
        let container_image = raw
            .container_image_with(&Span::current(), env)
            .to_string();
        Ok(ResolvedJobOptions::new(
            endpoint,
            job_name,
            container_image,
            raw.experiments(),
            raw.is_async(),
            raw.internal_java_runner().map(str::to_string),
        ))
    }
}

/// The name given to jobs submitted without `--job_name`.
pub fn default_job_name(env: &impl Environment) -> String {
    format!("{JOB_NAME_PREFIX}{}", env.now_nanos())
}

/// The dev container image for `env`'s current user.
///
/// An unknown user leaves the user segment empty.
pub fn default_container_image(env: &impl Environment) -> String {
    let user = env.current_user().unwrap_or_default();
    format!("{user}{DEV_CONTAINER_IMAGE_SUFFIX}")
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
