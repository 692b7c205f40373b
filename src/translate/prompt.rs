use std::collections::HashMap;

use anyhow::Result;

use crate::agent::input_types::{Message, Role};

/// System instruction for the translation prompt
pub const TRANSLATE_SYSTEM_TEMPLATE: &str = "Translate the following into {language}:";
/// User turn carrying the text to translate
pub const TRANSLATE_USER_TEMPLATE: &str = "{text}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

#[derive(Debug, Clone)]
struct MessageTemplate {
    role: Role,
    segments: Vec<Segment>,
}

/// Role-tagged message templates with `{name}` placeholders.
///
/// `{{` and `}}` render as literal braces. Substituted values are inserted
/// verbatim and never scanned for placeholders.
#[derive(Debug, Clone)]
pub struct ChatPromptTemplate {
    messages: Vec<MessageTemplate>,
}

impl ChatPromptTemplate {
    pub fn from_messages(messages: &[(Role, &str)]) -> Result<Self> {
        let messages = messages
            .iter()
            .map(|(role, template)| {
                Ok::<_, anyhow::Error>(MessageTemplate {
                    role: *role,
                    segments: parse_template(template)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { messages })
    }

    /// The fixed system + user prompt used by `/translate`.
    pub fn translation() -> Result<Self> {
        Self::from_messages(&[
            (Role::System, TRANSLATE_SYSTEM_TEMPLATE),
            (Role::User, TRANSLATE_USER_TEMPLATE),
        ])
    }

    /// Placeholder names in first-seen order
    pub fn input_variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in self.messages.iter().flat_map(|m| &m.segments) {
            if let Segment::Variable(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name.as_str());
                }
            }
        }
        names
    }

    pub fn format(&self, variables: &HashMap<&str, &str>) -> Result<Vec<Message>> {
        self.messages
            .iter()
            .map(|template| {
                let mut content = String::new();
                for segment in &template.segments {
                    match segment {
                        Segment::Literal(text) => content.push_str(text),
                        Segment::Variable(name) => {
                            let value = variables.get(name.as_str()).ok_or_else(|| {
                                anyhow::anyhow!("Missing variable '{}' for prompt template", name)
                            })?;
                            content.push_str(value);
                        }
                    }
                }
                Ok::<_, anyhow::Error>(Message::new(template.role, content))
            })
            .collect()
    }
}

fn parse_template(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => {
                            anyhow::bail!("Unbalanced '{{' in prompt template: {}", template)
                        }
                        Some(ch) => name.push(ch),
                    }
                }
                if name.is_empty() {
                    anyhow::bail!("Empty placeholder in prompt template: {}", template);
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Variable(name));
            }
            '}' => anyhow::bail!("Single '}}' in prompt template: {}", template),
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}
