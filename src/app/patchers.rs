//! Per-target patchers and the read-all-then-write plan that drives them.
//!
//! Every target is read exactly once while planning, so read failures abort
//! before anything is written. Writes then happen once per target in a fixed
//! order. They are independent: a failure part-way leaves earlier targets
//! patched and later ones untouched, with no rollback.

use crate::domain::patch::{
    DESCRIPTION_KEY, EnvFile, GETTING_STARTED_HEADER, INSTALL_STEP_NAME, PatchStrategy, TITLE_KEY,
    WorkflowPatch, current_install_command, has_section, patch_readme, patch_workflow,
    render_getting_started, render_workspace_config,
};
use crate::domain::{
    AppError, Change, Configuration, MANIFEST_FILE, ManifestValues, Summary, TargetFiles,
};
use crate::ports::{Console, ManifestTool, ProjectFiles};

/// New content for a target, or the reason it is left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patched {
    Write { content: String, detail: Option<String> },
    Skip { reason: String },
}

impl Patched {
    fn write(content: String) -> Self {
        Patched::Write { content, detail: None }
    }
}

/// Read / apply contract shared by the text targets.
pub trait TextPatcher {
    type State;

    /// Target path relative to the project root.
    fn path(&self) -> &str;

    /// Read the current state of the target.
    fn read(&self, files: &impl ProjectFiles) -> Result<Self::State, AppError>;

    /// Compute the new content from the resolved configuration.
    fn apply(&self, config: &Configuration, state: &Self::State) -> Result<Patched, AppError>;

    /// Preview lines for the summary. Must not touch any file.
    fn describe(&self, config: &Configuration, state: &Self::State) -> Vec<Change>;
}

pub struct ReadmePatcher<'a> {
    path: &'a str,
}

impl TextPatcher for ReadmePatcher<'_> {
    type State = String;

    fn path(&self) -> &str {
        self.path
    }

    fn read(&self, files: &impl ProjectFiles) -> Result<String, AppError> {
        files.read_file(self.path)
    }

    fn apply(&self, config: &Configuration, state: &String) -> Result<Patched, AppError> {
        let section = render_getting_started(config.package_manager)?;
        Ok(Patched::write(patch_readme(state, &config.name, &section)))
    }

    fn describe(&self, config: &Configuration, state: &String) -> Vec<Change> {
        let current = state.lines().next().filter(|line| line.starts_with('#'));
        let section = if has_section(state, GETTING_STARTED_HEADER) {
            format!("section \"{GETTING_STARTED_HEADER}\" already present")
        } else {
            format!("section \"{GETTING_STARTED_HEADER}\" to be added")
        };
        vec![Change::value("heading", current, format!("# {}", config.name)), Change::note(section)]
    }
}

pub struct EnvPatcher<'a> {
    path: &'a str,
}

impl TextPatcher for EnvPatcher<'_> {
    type State = Option<EnvFile>;

    fn path(&self) -> &str {
        self.path
    }

    /// A missing env file reads as `None` rather than an error.
    fn read(&self, files: &impl ProjectFiles) -> Result<Option<EnvFile>, AppError> {
        match files.read_file(self.path) {
            Ok(content) => Ok(Some(EnvFile::parse(&content))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn apply(&self, config: &Configuration, state: &Option<EnvFile>) -> Result<Patched, AppError> {
        let mut file = state.clone().unwrap_or_default();
        file.set_all(&[
            (TITLE_KEY, config.name.as_str()),
            (DESCRIPTION_KEY, config.description.as_str()),
        ]);
        Ok(Patched::write(file.render()))
    }

    fn describe(&self, config: &Configuration, state: &Option<EnvFile>) -> Vec<Change> {
        let current = |key: &str| state.as_ref().and_then(|file| file.get(key));
        let mut changes = vec![
            Change::value(TITLE_KEY, current(TITLE_KEY), config.name.as_str()),
            Change::value(DESCRIPTION_KEY, current(DESCRIPTION_KEY), config.description.as_str()),
        ];
        if state.is_none() {
            changes.push(Change::note("file will be created"));
        }
        changes
    }
}

pub struct WorkspacePatcher<'a> {
    path: &'a str,
}

impl TextPatcher for WorkspacePatcher<'_> {
    /// Whether the file exists. Its content is never read: the tool owns it.
    type State = bool;

    fn path(&self) -> &str {
        self.path
    }

    fn read(&self, files: &impl ProjectFiles) -> Result<bool, AppError> {
        Ok(files.file_exists(self.path))
    }

    fn apply(&self, config: &Configuration, _exists: &bool) -> Result<Patched, AppError> {
        Ok(Patched::write(render_workspace_config(config.package_manager)?))
    }

    fn describe(&self, config: &Configuration, exists: &bool) -> Vec<Change> {
        let command = config.package_manager.workspace_install_command();
        let note = if *exists { "existing content is replaced" } else { "file will be created" };
        vec![Change::value("setupCommands", None, format!("[{command}]")), Change::note(note)]
    }
}

const LINE_SCAN_DETAIL: &str = "matched by line scan";

fn missing_step_reason() -> String {
    format!("no \"{INSTALL_STEP_NAME}\" step with a run line")
}

pub struct WorkflowPatcher<'a> {
    path: &'a str,
}

impl TextPatcher for WorkflowPatcher<'_> {
    type State = String;

    fn path(&self) -> &str {
        self.path
    }

    fn read(&self, files: &impl ProjectFiles) -> Result<String, AppError> {
        files.read_file(self.path)
    }

    fn apply(&self, config: &Configuration, state: &String) -> Result<Patched, AppError> {
        let command = config.package_manager.ci_install_command();
        Ok(match patch_workflow(state, command)? {
            WorkflowPatch::Patched { content, strategy: PatchStrategy::Structural } => {
                Patched::write(content)
            }
            WorkflowPatch::Patched { content, strategy: PatchStrategy::LineScan } => {
                Patched::Write { content, detail: Some(LINE_SCAN_DETAIL.to_string()) }
            }
            WorkflowPatch::StepNotFound => Patched::Skip { reason: missing_step_reason() },
        })
    }

    /// Mirrors `apply`: a step that will not be patched is reported as left unchanged.
    fn describe(&self, config: &Configuration, state: &String) -> Vec<Change> {
        let command = config.package_manager.ci_install_command();
        match patch_workflow(state, command) {
            Ok(WorkflowPatch::Patched { strategy, .. }) => {
                let current = current_install_command(state);
                let mut changes = vec![Change::value(INSTALL_STEP_NAME, current.as_deref(), command)];
                if strategy == PatchStrategy::LineScan {
                    changes.push(Change::note(LINE_SCAN_DETAIL));
                }
                changes
            }
            Ok(WorkflowPatch::StepNotFound) => {
                vec![Change::note(format!("left unchanged: {}", missing_step_reason()))]
            }
            Err(err) => vec![Change::note(format!("cannot be patched: {err}"))],
        }
    }
}

/// Current state of every target, read once before anything is written.
pub struct Plan<'a> {
    manifest: ManifestValues,
    readme: (ReadmePatcher<'a>, String),
    env: (EnvPatcher<'a>, Option<EnvFile>),
    workspace: (WorkspacePatcher<'a>, bool),
    workflow: (WorkflowPatcher<'a>, String),
}

impl<'a> Plan<'a> {
    /// Read all text targets. `manifest` is the already-read manifest state.
    pub fn read(
        files: &impl ProjectFiles,
        targets: &'a TargetFiles,
        manifest: ManifestValues,
    ) -> Result<Self, AppError> {
        let readme = ReadmePatcher { path: &targets.readme };
        let env = EnvPatcher { path: &targets.env };
        let workspace = WorkspacePatcher { path: &targets.workspace };
        let workflow = WorkflowPatcher { path: &targets.workflow };

        let readme_state = readme.read(files)?;
        let env_state = env.read(files)?;
        let workspace_state = workspace.read(files)?;
        let workflow_state = workflow.read(files)?;

        Ok(Self {
            manifest,
            readme: (readme, readme_state),
            env: (env, env_state),
            workspace: (workspace, workspace_state),
            workflow: (workflow, workflow_state),
        })
    }

    /// Before/after preview of every target.
    pub fn summary(&self, config: &Configuration) -> Summary {
        let mut summary = Summary::default();
        summary.push(
            MANIFEST_FILE,
            vec![
                Change::value("name", self.manifest.name.as_deref(), config.name.as_str()),
                Change::value(
                    "description",
                    self.manifest.description.as_deref(),
                    config.description.as_str(),
                ),
            ],
        );
        summary.push(self.readme.0.path(), self.readme.0.describe(config, &self.readme.1));
        summary.push(self.env.0.path(), self.env.0.describe(config, &self.env.1));
        summary.push(self.workspace.0.path(), self.workspace.0.describe(config, &self.workspace.1));
        summary.push(self.workflow.0.path(), self.workflow.0.describe(config, &self.workflow.1));
        summary
    }

    /// Write every target in order: manifest, README, env, workspace, workflow.
    ///
    /// Returns the paths that were written.
    pub fn apply(
        &self,
        files: &impl ProjectFiles,
        manifest: &impl ManifestTool,
        config: &Configuration,
        console: &mut impl Console,
    ) -> Result<Vec<String>, AppError> {
        let patched = [
            (self.readme.0.path(), self.readme.0.apply(config, &self.readme.1)?),
            (self.env.0.path(), self.env.0.apply(config, &self.env.1)?),
            (self.workspace.0.path(), self.workspace.0.apply(config, &self.workspace.1)?),
            (self.workflow.0.path(), self.workflow.0.apply(config, &self.workflow.1)?),
        ];

        manifest.write_fields(&[
            ("name", config.name.as_str()),
            ("description", config.description.as_str()),
        ])?;
        console.info(&format!("✅ Updated {MANIFEST_FILE}"))?;
        let mut written = vec![MANIFEST_FILE.to_string()];

        for (path, outcome) in patched {
            match outcome {
                Patched::Write { content, detail } => {
                    files.write_file(path, &content)?;
                    match detail {
                        Some(detail) => console.info(&format!("✅ Updated {path} ({detail})"))?,
                        None => console.info(&format!("✅ Updated {path}"))?,
                    }
                    written.push(path.to_string());
                }
                Patched::Skip { reason } => {
                    console.warn(&format!("Left {path} unchanged: {reason}"))?;
                }
            }
        }

        Ok(written)
    }
}
