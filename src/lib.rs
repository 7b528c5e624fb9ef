//! A small Markdown-subset parser that builds an HTML node tree.
//!
//! The pipeline splits a document into blocks with [`markdown_to_blocks`], classifies each one
//! with [`block_to_block_type`], parses inline spans with [`text_to_textnodes`] and assembles the
//! result into an [`HtmlNode`] tree via [`markdown_to_html_node`]. [`html_of`] does all of it and
//! renders the tree to a string.
//!
//! When the `markdown` feature is enabled, [`markdown_of`] renders the document and converts the
//! HTML to CommonMark.
//!
//! The grammar is deliberately narrow: ATX headings, fenced code, `>` quotes, `- ` and `1.` lists,
//! paragraphs, and the inline spans `**bold**`, `_italic_`, `` `code` ``, `![alt](url)` and
//! `[text](url)`. Blocks and spans never nest.

mod ast;
pub mod error;
pub use ast::{
    Attributes, BlockType, HtmlNode, TextNode, TextType, block_to_block_type, extract_markdown_images,
    extract_markdown_links, heading_level, split_nodes_delimiter, split_nodes_image, split_nodes_link,
    text_node_to_html_node, text_to_textnodes,
};
pub use error::{Error, ParseError, RenderError};

const BLOCK_SEPARATOR: &str = "\n\n";

/// Split a document into trimmed, non-empty blocks.
///
/// Blocks are separated by the literal `"\n\n"`. Longer runs of newlines leave empty pieces
/// behind, which are discarded, so any number of blank lines acts as one separator.
pub fn markdown_to_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Convert inline Markdown into the leaf nodes that render it.
fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, ParseError> {
    Ok(text_to_textnodes(text)?.iter().map(text_node_to_html_node).collect())
}

fn paragraph_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block.lines().map(str::trim).collect::<Vec<_>>().join(" ");
    Ok(HtmlNode::parent("p", text_to_children(&text)?))
}

fn heading_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let Some(level) = heading_level(block) else {
        return paragraph_to_html_node(block);
    };
    let text = &block[level as usize + 1..];
    Ok(HtmlNode::parent(format!("h{level}"), text_to_children(text)?))
}

fn code_to_html_node(block: &str) -> HtmlNode {
    let inner = block
        .strip_prefix("```")
        .and_then(|b| b.strip_suffix("```"))
        .unwrap_or(block);
    let inner = inner.strip_prefix('\n').unwrap_or(inner);
    HtmlNode::parent("pre", vec![HtmlNode::leaf("code", inner)])
}

fn quote_to_html_node(block: &str) -> Result<HtmlNode, ParseError> {
    let text = block
        .lines()
        .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn list_to_html_node(block: &str, kind: BlockType) -> Result<HtmlNode, ParseError> {
    let tag = match kind {
        BlockType::OrderedList => "ol",
        _ => "ul",
    };

    let mut items = Vec::new();
    for line in block.lines() {
        let content = match kind {
            BlockType::OrderedList => match ast::ordered_marker_len(line) {
                Some((_, len)) => line[len..].trim_start(),
                None => line,
            },
            _ => line.strip_prefix("- ").unwrap_or(line),
        };
        items.push(HtmlNode::parent("li", text_to_children(content)?));
    }

    Ok(HtmlNode::parent(tag, items))
}

/// Build the node for a single block of the given type.
pub fn block_to_html_node(block: &str, kind: BlockType) -> Result<HtmlNode, ParseError> {
    match kind {
        BlockType::Paragraph => paragraph_to_html_node(block),
        BlockType::Heading => heading_to_html_node(block),
        BlockType::Code => Ok(code_to_html_node(block)),
        BlockType::Quote => quote_to_html_node(block),
        BlockType::UnorderedList | BlockType::OrderedList => list_to_html_node(block, kind),
    }
}

/// Parse a Markdown document into a tree rooted at a `<div>`.
///
/// Every block becomes one child of the root, in document order. The first malformed block
/// aborts the conversion with a [`ParseError`]; no partial tree is returned.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode, ParseError> {
    let children = markdown_to_blocks(document)
        .into_iter()
        .map(|block| block_to_html_node(block, block_to_block_type(block)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Render the provided Markdown document to HTML.
///
/// Use [`markdown_to_html_node`] directly when you need the tree rather than the string.
pub fn html_of(document: &str) -> Result<String, Error> {
    Ok(markdown_to_html_node(document)?.to_html()?)
}

/// Render the document and convert the resulting HTML to CommonMark through [html2md].
///
/// This function is only available when the `markdown` feature is enabled.
#[cfg(feature = "markdown")]
pub fn markdown_of(document: &str) -> Result<String, Error> {
    let html = html_of(document)?;
    Ok(html2md::parse_html(&html))
}
