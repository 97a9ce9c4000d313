//! Parameter collection
//!
//! Before a template can be rendered somebody has to ask the user for the
//! values. A [`ParameterCollector`] turns the template's declared variables
//! into instructions for whoever sits between the user and the render tool.

use crate::template::Template;

pub trait ParameterCollector: Send + Sync {
    /// Instructions asking for every variable of `template`, then calling `tool_name`
    fn instructions(&self, template: &Template, tool_name: &str) -> String;
}

/// Markdown questionnaire, one bullet per variable
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionnaireCollector;

impl ParameterCollector for QuestionnaireCollector {
    fn instructions(&self, template: &Template, tool_name: &str) -> String {
        let mut text = format!(
            "Ask the following questions of the user. Once the user answers them, use them to call the {} tool.\n",
            tool_name
        );
        for variable in template.variables() {
            text.push_str(&format!(
                "\n- **{}**: {}",
                variable.name, variable.description
            ));
        }
        text
    }
}
