//! Serialization support for the node types.
//!
//! When the `serde` feature is enabled, [`TextType`](crate::TextType), [`TextNode`](crate::TextNode),
//! [`BlockType`](crate::BlockType), [`Attributes`](crate::Attributes) and [`HtmlNode`](crate::HtmlNode)
//! implement [`serde::Serialize`] and [`serde::Deserialize`] via derive macros.
//!
//! ## Example
//!
//! ```ignore
//! use minimark::{markdown_to_html_node, HtmlNode};
//!
//! let tree = markdown_to_html_node("# Heading\n\nParagraph text.").unwrap();
//! let json = serde_json::to_string_pretty(&tree).unwrap();
//! let parsed: HtmlNode = serde_json::from_str(&json).unwrap();
//! assert_eq!(tree, parsed);
//! ```
