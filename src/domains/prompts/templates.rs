//! Prompt templates module.
//!
//! A small `{{variable}}` renderer with `{{#if variable}}...{{else}}...{{/if}}`
//! blocks. Blocks do not nest.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE_TAG: &str = "{{else}}";
const ENDIF_TAG: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Names of the arguments marked as required.
    pub fn required_arguments(&self) -> impl Iterator<Item = &str> {
        self.arguments
            .iter()
            .filter(|arg| arg.required.unwrap_or(false))
            .map(|arg| arg.name.as_str())
    }

    /// Render the template with the given arguments.
    ///
    /// Conditionals are resolved first. A variable counts as set when it is
    /// present and non-empty. Placeholders with no value render as nothing.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let resolved = resolve_conditionals(&self.template, arguments)?;
        Ok(substitute(&resolved, arguments))
    }
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments.get(name).is_some_and(|v| !v.is_empty())
}

fn resolve_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(IF_OPEN) {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + IF_OPEN.len()..];

        let name_end = after_open
            .find("}}")
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let name = after_open[..name_end].trim();
        let body_and_rest = &after_open[name_end + 2..];

        let endif = body_and_rest
            .find(ENDIF_TAG)
            .ok_or_else(|| PromptError::template(format!("Missing {{{{/if}}}} for '{}'", name)))?;
        let body = &body_and_rest[..endif];

        let (when_set, otherwise) = body.split_once(ELSE_TAG).unwrap_or((body, ""));
        out.push_str(if is_set(arguments, name) {
            when_set
        } else {
            otherwise
        });

        rest = &body_and_rest[endif + ENDIF_TAG.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Replace every `{{name}}` in one pass. Values are inserted verbatim.
fn substitute(template: &str, arguments: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("}}") {
            Some(close) => {
                let name = after_open[..close].trim();
                if let Some(value) = arguments.get(name) {
                    out.push_str(value);
                }
                rest = &after_open[close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
