//! Interactive question flow.
//!
//! The flow is a fixed, ordered list of [`PromptStep`]s. Each step carries a
//! precondition over the answers collected so far; a step whose precondition
//! is false is skipped. The list can be inspected and driven without a
//! terminal by supplying any [`Prompter`].
//!
//! When a prompt cannot be shown ([`PromptError::Unavailable`]) the step fails
//! with the error a non-interactive caller would expect: an unknown template,
//! a missing overwrite decision or an invalid package name.

use std::path::PathBuf;

use tracing::debug;

use crate::{
    application::{
        ApplicationError,
        ports::{Choice, Filesystem, PromptError, Prompter, SelectPrompt, TextPrompt},
        services::ScaffoldRequest,
    },
    domain::{
        DirectoryState, DomainError, FRAMEWORKS, FrameworkDef, OverwriteDecision, PackageName,
        TargetDir, TemplateId, all_template_ids, locate,
    },
    error::{ScaffoldError, ScaffoldResult},
};

/// Values supplied up front (flags, positional argument, config).
#[derive(Debug, Clone, Default)]
pub struct FlowInput {
    pub target_dir: Option<String>,
    pub template: Option<String>,
    pub overwrite: Option<OverwriteDecision>,
    pub package_name: Option<String>,
    /// Offered as the project-name answer; also used when nobody can answer.
    pub default_target_dir: String,
    /// Initially highlighted framework and variant.
    pub default_template: Option<TemplateId>,
    pub cwd: PathBuf,
}

/// Answers collected so far.
#[derive(Debug, Clone)]
pub struct FlowState {
    pub cwd: PathBuf,
    pub target_dir: TargetDir,
    /// The target came from the command line; no project-name prompt.
    pub target_given: bool,
    pub directory: DirectoryState,
    pub overwrite: Option<OverwriteDecision>,
    pub package_name: Option<PackageName>,
    pub framework: Option<&'static FrameworkDef>,
    pub template: Option<TemplateId>,
    /// An identifier that was supplied but is not in the registry.
    pub rejected_template: Option<String>,
    default_target_dir: String,
    default_template: Option<TemplateId>,
}

impl FlowState {
    pub fn project_name(&self) -> String {
        self.target_dir.project_name(&self.cwd)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    ProjectName,
    Overwrite,
    OverwriteCheck,
    PackageName,
    Framework,
    Variant,
}

/// One question and the condition under which it is asked.
#[derive(Clone, Copy)]
pub struct PromptStep {
    pub kind: StepKind,
    pub applies: fn(&FlowState) -> bool,
}

impl std::fmt::Debug for PromptStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptStep").field("kind", &self.kind).finish()
    }
}

/// The steps in the order they run.
pub static STEPS: &[PromptStep] = &[
    PromptStep {
        kind: StepKind::ProjectName,
        applies: |s| !s.target_given,
    },
    PromptStep {
        kind: StepKind::Overwrite,
        applies: |s| s.directory.is_blocking() && s.overwrite.is_none(),
    },
    PromptStep {
        kind: StepKind::OverwriteCheck,
        applies: |s| s.directory.is_blocking() && s.overwrite == Some(OverwriteDecision::Cancel),
    },
    PromptStep {
        kind: StepKind::PackageName,
        applies: |s| s.package_name.is_none() && !PackageName::is_valid(&s.project_name()),
    },
    PromptStep {
        kind: StepKind::Framework,
        applies: |s| s.template.is_none(),
    },
    PromptStep {
        kind: StepKind::Variant,
        applies: |s| s.template.is_none() && s.framework.is_some_and(|f| !f.variants.is_empty()),
    },
];

/// Drives [`STEPS`] against a prompter.
pub struct PromptFlow<'a> {
    prompter: &'a dyn Prompter,
    filesystem: &'a dyn Filesystem,
}

impl<'a> PromptFlow<'a> {
    pub fn new(prompter: &'a dyn Prompter, filesystem: &'a dyn Filesystem) -> Self {
        Self {
            prompter,
            filesystem,
        }
    }

    /// Initial state from pre-supplied values.
    pub fn start(&self, input: FlowInput) -> ScaffoldResult<FlowState> {
        let target_given = input
            .target_dir
            .as_deref()
            .and_then(TargetDir::format)
            .is_some();
        let target_dir = TargetDir::resolve(input.target_dir.as_deref(), &input.default_target_dir);

        let package_name = input.package_name.map(PackageName::parse).transpose()?;

        let (template, rejected_template) = match input.template {
            Some(raw) => match raw.parse::<TemplateId>() {
                Ok(id) => (Some(id), None),
                Err(_) => (None, Some(raw)),
            },
            None => (None, None),
        };

        let mut state = FlowState {
            cwd: input.cwd,
            target_dir,
            target_given,
            directory: DirectoryState::Missing,
            overwrite: input.overwrite,
            package_name,
            framework: None,
            template,
            rejected_template,
            default_target_dir: input.default_target_dir,
            default_template: input.default_template,
        };
        self.classify(&mut state)?;
        Ok(state)
    }

    /// Ask every applicable question and turn the answers into a request.
    pub fn run(&self, input: FlowInput) -> ScaffoldResult<ScaffoldRequest> {
        let mut state = self.start(input)?;
        for step in STEPS {
            if (step.applies)(&state) {
                debug!(step = ?step.kind, "Prompting");
                self.ask(step.kind, &mut state)?;
            }
        }
        finish(state)
    }

    fn classify(&self, state: &mut FlowState) -> ScaffoldResult<()> {
        let root = state.target_dir.absolute(&state.cwd);
        let listing = self.filesystem.read_dir_names(&root)?;
        state.directory = DirectoryState::classify(listing.as_deref());
        Ok(())
    }

    fn ask(&self, kind: StepKind, state: &mut FlowState) -> ScaffoldResult<()> {
        match kind {
            StepKind::ProjectName => self.ask_project_name(state),
            StepKind::Overwrite => self.ask_overwrite(state),
            StepKind::OverwriteCheck => Err(ApplicationError::Cancelled.into()),
            StepKind::PackageName => self.ask_package_name(state),
            StepKind::Framework => self.ask_framework(state),
            StepKind::Variant => self.ask_variant(state),
        }
    }

    fn ask_project_name(&self, state: &mut FlowState) -> ScaffoldResult<()> {
        let prompt = TextPrompt {
            message: "Project name:".into(),
            initial: Some(state.default_target_dir.clone()),
        };
        let answer = match self.prompter.text(&prompt) {
            Ok(answer) => Some(answer),
            Err(PromptError::Unavailable) => None,
            Err(e) => return Err(prompt_failure(e)),
        };
        state.target_dir = TargetDir::resolve(answer.as_deref(), &state.default_target_dir);
        self.classify(state)
    }

    fn ask_overwrite(&self, state: &mut FlowState) -> ScaffoldResult<()> {
        let prompt = SelectPrompt {
            message: format!(
                "{} is not empty. Please choose how to proceed:",
                state.target_dir.describe()
            ),
            choices: OverwriteDecision::ALL
                .iter()
                .map(|d| Choice::plain(d.title()))
                .collect(),
            initial: 0,
        };
        let index = self.prompter.select(&prompt).map_err(|e| match e {
            PromptError::Unavailable => DomainError::OverwriteChoiceRequired {
                target: state.target_dir.to_string(),
            }
            .into(),
            e => prompt_failure(e),
        })?;
        state.overwrite = Some(pick(&OverwriteDecision::ALL, index)?);
        Ok(())
    }

    fn ask_package_name(&self, state: &mut FlowState) -> ScaffoldResult<()> {
        let project_name = state.project_name();
        let mut message = "Package name:".to_string();
        let mut initial = PackageName::sanitize(&project_name);

        loop {
            let prompt = TextPrompt {
                message: message.clone(),
                initial: Some(initial.clone()),
            };
            let answer = match self.prompter.text(&prompt) {
                Ok(answer) => answer,
                Err(PromptError::Unavailable) => {
                    return Err(PackageName::parse(project_name.as_str())
                        .err()
                        .map(ScaffoldError::from)
                        .unwrap_or_else(|| internal("package name prompt without cause")));
                }
                Err(e) => return Err(prompt_failure(e)),
            };

            match PackageName::parse(answer.trim()) {
                Ok(name) => {
                    state.package_name = Some(name);
                    return Ok(());
                }
                Err(DomainError::InvalidPackageName { name, reason }) => {
                    debug!(%name, %reason, "Package name rejected");
                    message = format!("Invalid package.json name ({reason}). Package name:");
                    initial = PackageName::sanitize(&name);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn ask_framework(&self, state: &mut FlowState) -> ScaffoldResult<()> {
        let message = match &state.rejected_template {
            Some(raw) => format!("\"{raw}\" isn't a valid template. Please choose from below: "),
            None => "Select a framework:".to_string(),
        };
        let initial = state
            .default_template
            .and_then(locate)
            .and_then(|(fw, _)| FRAMEWORKS.iter().position(|f| f.name == fw.name))
            .unwrap_or(0);
        let prompt = SelectPrompt {
            message,
            choices: FRAMEWORKS
                .iter()
                .map(|f| Choice::colored(f.display, f.color))
                .collect(),
            initial,
        };

        let index = self.prompter.select(&prompt).map_err(|e| match e {
            PromptError::Unavailable => match &state.rejected_template {
                Some(raw) => DomainError::UnknownTemplate {
                    given: raw.clone(),
                    valid: all_template_ids().iter().map(TemplateId::as_str).collect(),
                }
                .into(),
                None => ApplicationError::PromptRequired { field: "template" }.into(),
            },
            e => prompt_failure(e),
        })?;

        let framework = pick_ref(FRAMEWORKS, index)?;
        state.framework = Some(framework);
        if framework.variants.is_empty() {
            state.template = framework.template;
        }
        Ok(())
    }

    fn ask_variant(&self, state: &mut FlowState) -> ScaffoldResult<()> {
        let Some(framework) = state.framework else {
            return Err(internal("variant prompt without a framework"));
        };
        let initial = state
            .default_template
            .and_then(|id| framework.variants.iter().position(|v| v.template == id))
            .unwrap_or(0);
        let prompt = SelectPrompt {
            message: "Select a variant:".into(),
            choices: framework
                .variants
                .iter()
                .map(|v| Choice::colored(v.display, v.color))
                .collect(),
            initial,
        };
        let index = self.prompter.select(&prompt).map_err(|e| match e {
            PromptError::Unavailable => ApplicationError::PromptRequired { field: "template" }.into(),
            e => prompt_failure(e),
        })?;
        state.template = Some(pick_ref(framework.variants, index)?.template);
        Ok(())
    }
}

fn finish(state: FlowState) -> ScaffoldResult<ScaffoldRequest> {
    let template = state
        .template
        .ok_or(ApplicationError::PromptRequired { field: "template" })?;
    let package_name = match state.package_name.clone() {
        Some(name) => name,
        None => PackageName::parse(state.project_name())?,
    };
    Ok(ScaffoldRequest {
        template: template.as_str().to_string(),
        target_dir: state.target_dir,
        cwd: state.cwd,
        package_name,
        overwrite: state.overwrite,
    })
}

fn pick<T: Copy>(items: &[T], index: usize) -> ScaffoldResult<T> {
    items
        .get(index)
        .copied()
        .ok_or_else(|| internal(&format!("selection {index} out of range")))
}

fn pick_ref<T>(items: &'static [T], index: usize) -> ScaffoldResult<&'static T> {
    items
        .get(index)
        .ok_or_else(|| internal(&format!("selection {index} out of range")))
}

fn prompt_failure(e: PromptError) -> ScaffoldError {
    match e {
        PromptError::Interrupted => ApplicationError::Cancelled.into(),
        other => ApplicationError::PromptFailed {
            reason: other.to_string(),
        }
        .into(),
    }
}

fn internal(message: &str) -> ScaffoldError {
    ScaffoldError::Internal {
        message: message.to_string(),
    }
}
