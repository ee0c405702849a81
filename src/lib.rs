//! Shared options for job submission.
//!
//! A job submission client needs a job service endpoint, a job name, a
//! worker container image and the list of enabled experiments before it can
//! build its request. [`JobOptions`] holds those values as given on the
//! command line and resolves the ones left unset:
//!
//! ```
//! use jobopts::{FixedEnvironment, JobOptions};
//!
//! let options = JobOptions {
//!     endpoint: "localhost:8099".to_string(),
//!     experiments: "beam_fn_api".to_string(),
//!     ..JobOptions::default()
//! };
//! let resolved = options.load_with(&FixedEnvironment::new(Some("alice"), 1)).unwrap();
//! assert_eq!(resolved.job_name(), "go-job-1");
//! assert_eq!(resolved.container_image(), "alice-docker-apache.bintray.io/beam/go:latest");
//! assert_eq!(resolved.experiments(), ["beam_fn_api"]);
//! ```
//!
//! The lazy resolvers on [`JobOptions`] (`job_name`, `container_image`) write
//! their default back into the raw value, so they take `&mut self`. Resolve
//! once before sharing the options, or share a [`ResolvedJobOptions`].

pub mod cmd;
pub mod env;
pub mod error;
pub mod options;
pub mod resolved;
pub mod utils;

pub use env::{Environment, FixedEnvironment, SystemEnvironment};
pub use error::{JobOptionsError, Result};
pub use options::JobOptions;
pub use resolved::ResolvedJobOptions;
