use std::collections::HashMap;

use crate::value::Value;

/// One node of a composition tree.
///
/// The tree mirrors what a declarative templating layer produces: component
/// instances interleaved with raw text, comments, and transparent fragments
/// whose children belong to the parent scope.
#[derive(Debug, Clone)]
pub enum Node {
    Text(String),
    Comment(String),
    Fragment(Vec<Node>),
    Component(Component),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Self::Comment(content.into())
    }

    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Self::Fragment(children.into_iter().collect())
    }

    pub fn component(&self) -> Option<&Component> {
        match self {
            Self::Component(component) => Some(component),
            _ => None,
        }
    }
}

impl From<Component> for Node {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

/// A named component instance with its declared props, slots, and children.
#[derive(Debug, Clone, Default)]
pub struct Component {
    pub name: String,
    pub props: HashMap<String, Value>,
    pub slots: Vec<String>,
    pub children: Vec<Node>,
}

impl Component {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Declare a bare attribute (a flag prop with no value).
    pub fn attr(mut self, key: impl Into<String>) -> Self {
        self.props.insert(key.into(), Value::Text(String::new()));
        self
    }

    /// Declare a named content region on this component.
    pub fn slot(mut self, name: impl Into<String>) -> Self {
        self.slots.push(name.into());
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up a prop by the first matching alias.
    pub fn prop_alias(&self, aliases: &[&str]) -> Option<&Value> {
        aliases.iter().find_map(|key| self.props.get(*key))
    }

    /// Boolean-ish prop lookup: absent means false, a bare attribute true.
    pub fn flag(&self, key: &str) -> bool {
        self.props.get(key).is_some_and(Value::as_flag)
    }

    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|slot| slot == name)
    }
}
