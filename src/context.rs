//! Render context for the generated entry file.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::features::Feature;

/// View engine binding written into the entry file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewBinding {
    pub engine: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<&'static str>,
}

/// A router mounted on the application at `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mount {
    pub path: String,
    pub code: String,
}

/// Variables available to the entry-file template.
///
/// Values are never modified in place; [`AppContext::apply`] returns the
/// context extended with one feature's contributions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AppContext {
    /// Package modules, keyed by the variable they are bound to.
    pub modules: BTreeMap<String, String>,
    /// Project-local modules, keyed by variable.
    pub local_modules: BTreeMap<String, String>,
    /// Middleware expressions in registration order.
    pub uses: Vec<String>,
    pub mounts: Vec<Mount>,
    pub view: Option<ViewBinding>,
}

impl AppContext {
    pub fn apply(self, feature: &Feature) -> Self {
        let AppContext {
            mut modules,
            mut local_modules,
            mut uses,
            mut mounts,
            view,
        } = self;

        for (name, module) in feature.modules {
            modules.insert(name.to_string(), module.to_string());
        }
        for (name, module) in feature.local_modules {
            local_modules.insert(name.to_string(), module.to_string());
        }
        uses.extend(feature.uses.iter().map(|u| u.to_string()));
        mounts.extend(feature.mounts.iter().map(|(path, code)| Mount {
            path: path.to_string(),
            code: code.to_string(),
        }));

        AppContext {
            modules,
            local_modules,
            uses,
            mounts,
            view: feature.view.or(view),
        }
    }

    /// JSON form handed to the template renderer.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!(self)
    }
}
