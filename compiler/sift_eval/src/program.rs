//! A compiled, ready-to-run set of templates.

use std::sync::Arc;

use sift_fmt::{LabelError, LabelTemplate};
use sift_ir::Template;
use tracing::debug;

use crate::HintIndex;

/// One template together with its parsed label.
#[derive(Debug, PartialEq, Eq)]
pub struct CompiledTemplate {
    template: Template,
    label: Option<LabelTemplate>,
}

impl CompiledTemplate {
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The parsed label, for named templates.
    pub fn label(&self) -> Option<&LabelTemplate> {
        self.label.as_ref()
    }
}

/// Immutable templates plus their start-hint index.
///
/// Built once per grammar; every scheduler and candidate reads it through
/// shared handles.
#[derive(Debug)]
pub struct Program {
    templates: Vec<Arc<CompiledTemplate>>,
    hints: HintIndex,
}

impl Program {
    /// Parse each named template's label and index the start hints.
    pub fn new(templates: Vec<Template>) -> Result<Program, LabelError> {
        let hints = HintIndex::new(&templates);
        let templates = templates
            .into_iter()
            .map(|template| {
                let label = template.label().map(LabelTemplate::parse).transpose()?;
                Ok(Arc::new(CompiledTemplate { template, label }))
            })
            .collect::<Result<Vec<_>, LabelError>>()?;

        debug!(
            templates = templates.len(),
            fallback = hints.fallback().len(),
            hinted_units = hints.hinted_units(),
            "compiled program"
        );
        Ok(Program { templates, hints })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<CompiledTemplate>> {
        self.templates.get(index)
    }

    pub fn templates(&self) -> &[Arc<CompiledTemplate>] {
        &self.templates
    }

    pub fn hints(&self) -> &HintIndex {
        &self.hints
    }
}

#[cfg(test)]
mod tests;
