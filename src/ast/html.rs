use crate::RenderError;

/// Insertion-ordered HTML attributes.
///
/// Rendered as ` key="value"` pairs in the order they were first inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, keeping the original position if `key` is already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render every pair as ` key="value"`; empty attributes render as `""`.
    pub fn to_html(&self) -> String {
        self.0.iter().map(|(k, v)| format!(" {k}=\"{v}\"")).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

/// A node of the rendered document tree.
///
/// A `Leaf` holds a value and never children; a `Parent` holds children and
/// never a value. Missing fields are representable so that malformed trees
/// are rejected by [`HtmlNode::to_html`] rather than rendered silently.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HtmlNode {
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    Parent {
        tag: Option<String>,
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Tagged leaf, e.g. `<b>value</b>`.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf { tag: Some(tag.into()), value: Some(value.into()), attributes: Attributes::new() }
    }

    /// Untagged leaf that renders its value as-is.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf { tag: None, value: Some(value.into()), attributes: Attributes::new() }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent { tag: Some(tag.into()), children: Some(children), attributes: Attributes::new() }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes.insert(key, value),
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { value, .. } => value.as_deref(),
            HtmlNode::Parent { .. } => None,
        }
    }

    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf { .. } => None,
            HtmlNode::Parent { children, .. } => children.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Render this node and its subtree to an HTML string.
    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<(), RenderError> {
        match self {
            HtmlNode::Leaf { tag, value, attributes } => {
                let Some(value) = value else {
                    return Err(RenderError::MissingValue { tag: tag.clone() });
                };
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        out.push_str(&format!("<{tag}{}>{value}</{tag}>", attributes.to_html()));
                    }
                }
            }
            HtmlNode::Parent { tag, children, attributes } => {
                let Some(tag) = tag else {
                    return Err(RenderError::MissingTag);
                };
                let Some(children) = children else {
                    return Err(RenderError::MissingChildren { tag: tag.clone() });
                };
                out.push_str(&format!("<{tag}{}>", attributes.to_html()));
                for child in children {
                    child.write_html(out)?;
                }
                out.push_str(&format!("</{tag}>"));
            }
        }
        Ok(())
    }
}
