//! Template generators.
//!
//! One generator per [`Kind`]. Each is a pure function from an identifier
//! (plus the project and, for components, a destination) to a
//! [`GenerationPlan`]. Templates are literal strings with `{{VARIABLE}}`
//! placeholders; anything else in them, including `<TOKEN>` markers meant
//! for the author, is emitted verbatim.
//!
//! ```text
//! Kind ──► plan() ──┬── Asset     ──► component::plan(src/assets)
//!                   ├── View      ──► component::plan(src/views)
//!                   ├── Component ──► component::plan(<destination>)
//!                   ├── Duck      ──► duck::plan
//!                   ├── Service   ──► service::plan
//!                   └── Report    ──► report::plan
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use heck::ToUpperCamelCase;
use serde::{Deserialize, Serialize};

use crate::domain::{
    Destination, DomainError, GenerationPlan, Identifier, Kind, ProjectContext,
};

mod component;
mod duck;
mod report;
mod service;

/// Extension of every generated source file.
pub const EXTENSION: &str = "tsx";

/// Output richness switches shared by all generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Emit a test spec (components and ducks).
    pub include_spec: bool,
    /// Emit a story file (components).
    pub include_story: bool,
    /// Emit an `index` re-export (components).
    pub include_index: bool,
    /// Where a component goes when no destination was given.
    pub component_dir: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            include_spec: false,
            include_story: false,
            include_index: true,
            component_dir: "src/components".into(),
        }
    }
}

/// Build the plan for `kind`.
///
/// `destination` is only consulted for [`Kind::Component`]; when absent the
/// component goes to [`GeneratorOptions::component_dir`].
pub fn plan(
    kind: Kind,
    identifier: &Identifier,
    destination: Option<&Destination>,
    project: &ProjectContext,
    options: &GeneratorOptions,
) -> Result<GenerationPlan, DomainError> {
    let ctx = RenderContext::new(identifier, project);

    let plan = match kind {
        Kind::Asset | Kind::View => {
            let fixed = kind.location().map(Destination::new).transpose()?.unwrap_or_default();
            component::plan(kind, identifier, &fixed, &ctx, options)
        }
        Kind::Component => {
            let fallback;
            let destination = match destination {
                Some(dest) => dest,
                None => {
                    fallback = Destination::new(&options.component_dir)?;
                    &fallback
                }
            };
            component::plan(kind, identifier, destination, &ctx, options)
        }
        Kind::Duck => duck::plan(identifier, &ctx, options),
        Kind::Service => service::plan(identifier),
        Kind::Report => report::plan(identifier),
    };

    Ok(plan)
}

/// Variables available to templates.
///
/// | Variable       | Example        |
/// |----------------|----------------|
/// | `NAME`         | `userProfile`  |
/// | `NAME_PASCAL`  | `UserProfile`  |
/// | `PROJECT_NAME` | `acme-web`     |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: BTreeMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(identifier: &Identifier, project: &ProjectContext) -> Self {
        let mut variables = BTreeMap::new();
        variables.insert("NAME", identifier.as_str().to_string());
        variables.insert("NAME_PASCAL", identifier.as_str().to_upper_camel_case());
        variables.insert("PROJECT_NAME", project.name().to_string());
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{VARIABLE}}` placeholder. Unknown placeholders stay.
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();
        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }
        result
    }
}

pub(crate) fn file_name(stem: &str) -> String {
    format!("{stem}.{EXTENSION}")
}

/// `<kind location>/<identifier>` as a native relative path.
pub(crate) fn conventional_dir(kind: Kind, identifier: &Identifier) -> PathBuf {
    kind.location()
        .unwrap_or_default()
        .split('/')
        .filter(|segment| !segment.is_empty())
        .chain(std::iter::once(identifier.as_str()))
        .collect()
}
