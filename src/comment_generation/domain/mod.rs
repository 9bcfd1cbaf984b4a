pub mod finding;
pub mod report;
pub mod severity;
pub mod workspace_prefix;

pub use finding::{Finding, PLACEHOLDER};
pub use report::{CvssV3, Dependency, DependencyCheckReport, Vulnerability};
pub use severity::Severity;
pub use workspace_prefix::{WorkspacePrefix, DEFAULT_WORKSPACE_PREFIX};
