//! Template Service - registry queries.
//!
//! Joins the static framework registry with what the template store actually
//! has on disk. Separated from `ScaffoldService` for single responsibility.

use serde::Serialize;

use crate::{
    application::ports::TemplateStore,
    domain::{ColorTag, FRAMEWORKS, TemplateId},
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub framework: &'static str,
    pub variant: Option<&'static str>,
    pub color: ColorTag,
    /// Template whose files are used; differs from `id` for fallbacks.
    pub source: TemplateId,
    pub available: bool,
}

/// Service for template queries.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Every registered template in prompt order.
    pub fn list(&self) -> Vec<TemplateInfo> {
        FRAMEWORKS
            .iter()
            .flat_map(|fw| {
                let rows: Vec<(TemplateId, Option<&'static str>, ColorTag)> =
                    if fw.variants.is_empty() {
                        fw.template.map(|id| (id, None, fw.color)).into_iter().collect()
                    } else {
                        fw.variants
                            .iter()
                            .map(|v| (v.template, Some(v.display), v.color))
                            .collect()
                    };
                rows.into_iter().map(move |(id, variant, color)| (fw.display, id, variant, color))
            })
            .map(|(framework, id, variant, color)| TemplateInfo {
                id,
                framework,
                variant,
                color,
                source: id.fallback(),
                available: self.store.contains(id.fallback()),
            })
            .collect()
    }
}
