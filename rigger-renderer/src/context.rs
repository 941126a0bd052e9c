//! Template context — serializable rendering payload built from [`DraftConfig`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rigger_core::DraftConfig;

use crate::error::RenderError;

/// Rendering payload.
///
/// Templates address variables by their declared name, which may contain
/// dashes: `{{ variables["ingress-host"] }}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub variables: BTreeMap<String, String>,
    pub config: ConfigCtx,
    pub meta: MetaCtx,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigCtx {
    pub template_name: String,
    pub template_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub rigger_version: String,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from a [`DraftConfig`].
    pub fn from_config(config: &DraftConfig) -> Self {
        TemplateContext {
            variables: config.variable_map(),
            config: ConfigCtx {
                template_name: config.template_name.0.clone(),
                template_type: config.template_type.to_string(),
            },
            meta: MetaCtx {
                rigger_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
