//! Pure text transforms, one per target file format.
//!
//! Nothing here touches the filesystem; callers read the current content,
//! pass it through the matching transform and write the result back.

pub mod env_file;
pub mod readme;
pub mod workflow;
pub mod workspace_config;

pub use env_file::{DESCRIPTION_KEY, EnvFile, TITLE_KEY, patch_env};
pub use readme::{GETTING_STARTED_HEADER, has_section, patch_readme, render_getting_started};
pub use workflow::{INSTALL_STEP_NAME, PatchStrategy, WorkflowPatch, current_install_command, patch_workflow};
pub use workspace_config::{WorkspaceSetup, render_workspace_config};
