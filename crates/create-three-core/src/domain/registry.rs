//! Framework and template registry.
//!
//! Every selectable framework is described exactly once by a [`FrameworkDef`]
//! in [`FRAMEWORKS`]. The closed set of template identifiers, the prompt
//! choices and the `list` output all derive from this table.
//!
//! # Adding a New Template
//!
//! 1. Add a variant to [`TemplateId`] with its `as_str` arm
//! 2. Add a [`VariantDef`] (or a variant-less [`FrameworkDef`]) below
//! 3. Ship a `template-<id>` directory next to the binary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── TemplateId ───────────────────────────────────────────────────────────────

/// One of the known template identifiers.
///
/// Parsing is the only way in from user input, so holding a `TemplateId`
/// means the identifier has already been checked against the closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    Vanilla,
    VanillaTs,
    ReactThreeFiber,
    ReactThreeFiberTs,
}

impl TemplateId {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vanilla => "vanilla",
            Self::VanillaTs => "vanilla-ts",
            Self::ReactThreeFiber => "react-three-fiber",
            Self::ReactThreeFiberTs => "react-three-fiber-ts",
        }
    }

    /// Name of the template directory on disk: `template-<id>`.
    pub fn dir_name(&self) -> String {
        format!("template-{}", self.as_str())
    }

    /// The template whose files are actually materialised.
    ///
    /// `vanilla-ts` is accepted but has no TypeScript output yet; it is served
    /// from the JavaScript template.
    pub const fn fallback(self) -> Self {
        match self {
            Self::VanillaTs => Self::Vanilla,
            other => other,
        }
    }

    /// Notice printed when [`fallback`](Self::fallback) substitutes a template.
    pub const fn fallback_notice(self) -> Option<&'static str> {
        match self {
            Self::VanillaTs => Some(
                "ts version is currently not supported, so now use js version instead",
            ),
            _ => None,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_template_ids()
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::UnknownTemplate {
                given: s.to_string(),
                valid: all_template_ids().iter().map(TemplateId::as_str).collect(),
            })
    }
}

// ── ColorTag ─────────────────────────────────────────────────────────────────

/// Display colour attached to a framework or variant.
///
/// The core only names the colour; the CLI decides how to paint it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Yellow,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
}

// ── Framework definitions ────────────────────────────────────────────────────

/// One selectable flavour of a framework (typically JS vs TS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDef {
    pub template: TemplateId,
    pub display: &'static str,
    pub color: ColorTag,
    /// Command that would replace the copy step. Carried for display only;
    /// no bundled variant sets it.
    pub custom_command: Option<&'static str>,
}

/// A framework as shown in the first selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkDef {
    pub name: &'static str,
    pub display: &'static str,
    pub color: ColorTag,
    /// Template used when the framework has no variants.
    pub template: Option<TemplateId>,
    pub variants: &'static [VariantDef],
}

impl FrameworkDef {
    /// Templates reachable through this framework, in prompt order.
    pub fn templates(&self) -> Vec<TemplateId> {
        if self.variants.is_empty() {
            self.template.into_iter().collect()
        } else {
            self.variants.iter().map(|v| v.template).collect()
        }
    }
}

/// Single source of truth for the selectable frameworks.
pub static FRAMEWORKS: &[FrameworkDef] = &[
    FrameworkDef {
        name: "vanilla",
        display: "Vanilla",
        color: ColorTag::Yellow,
        template: Some(TemplateId::Vanilla),
        variants: &[
            VariantDef {
                template: TemplateId::VanillaTs,
                display: "TypeScript",
                color: ColorTag::Blue,
                custom_command: None,
            },
            VariantDef {
                template: TemplateId::Vanilla,
                display: "JavaScript",
                color: ColorTag::Yellow,
                custom_command: None,
            },
        ],
    },
    FrameworkDef {
        name: "react",
        display: "React-Three-Fiber",
        color: ColorTag::Cyan,
        template: None,
        variants: &[
            VariantDef {
                template: TemplateId::ReactThreeFiberTs,
                display: "TypeScript",
                color: ColorTag::Blue,
                custom_command: None,
            },
            VariantDef {
                template: TemplateId::ReactThreeFiber,
                display: "JavaScript",
                color: ColorTag::Yellow,
                custom_command: None,
            },
        ],
    },
];

/// The closed set of template identifiers, derived from [`FRAMEWORKS`].
pub fn all_template_ids() -> Vec<TemplateId> {
    FRAMEWORKS.iter().flat_map(FrameworkDef::templates).collect()
}

/// Find the framework and variant a template belongs to.
pub fn locate(id: TemplateId) -> Option<(&'static FrameworkDef, Option<&'static VariantDef>)> {
    FRAMEWORKS.iter().find_map(|fw| {
        if let Some(variant) = fw.variants.iter().find(|v| v.template == id) {
            Some((fw, Some(variant)))
        } else if fw.variants.is_empty() && fw.template == Some(id) {
            Some((fw, None))
        } else {
            None
        }
    })
}
