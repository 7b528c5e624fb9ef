use super::{TextNode, TextType};
use crate::ParseError;

/// Split every plain node on `delimiter`, turning the enclosed runs into `text_type` nodes.
///
/// Nodes that are already formatted pass through untouched. A plain node with an odd
/// number of delimiters is rejected; empty runs are dropped.
pub fn split_nodes_delimiter(
    nodes: Vec<TextNode>, delimiter: &str, text_type: TextType,
) -> Result<Vec<TextNode>, ParseError> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() || !node.text.contains(delimiter) {
            out.push(node);
            continue;
        }

        let parts: Vec<&str> = node.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            return Err(ParseError::UnbalancedDelimiter { delimiter: delimiter.to_string(), text: node.text.clone() });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let kind = if i % 2 == 0 { TextType::Text } else { text_type };
            out.push(TextNode::new(part, kind));
        }
    }

    Ok(out)
}

/// Match `[label](url)` starting at byte `i`, where neither part contains its own
/// bracket pair. Returns the label, url and the byte index just past `)`.
fn match_bracketed(text: &str, i: usize) -> Option<(&str, &str, usize)> {
    let bytes = text.as_bytes();
    if bytes.get(i) != Some(&b'[') {
        return None;
    }

    let label_start = i + 1;
    let mut j = label_start;
    while j < bytes.len() && bytes[j] != b']' {
        if bytes[j] == b'[' {
            return None;
        }
        j += 1;
    }
    if j >= bytes.len() {
        return None;
    }
    let label_end = j;

    if bytes.get(j + 1) != Some(&b'(') {
        return None;
    }
    let url_start = j + 2;
    let mut k = url_start;
    while k < bytes.len() && bytes[k] != b')' {
        if bytes[k] == b'(' {
            return None;
        }
        k += 1;
    }
    if k >= bytes.len() {
        return None;
    }

    Some((&text[label_start..label_end], &text[url_start..k], k + 1))
}

/// Return `(alt, url)` for every `![alt](url)` in `text`, left to right.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'!' {
            if let Some((alt, url, end)) = match_bracketed(text, i + 1) {
                out.push((alt.to_string(), url.to_string()));
                i = end;
                continue;
            }
        }
        i += 1;
    }

    out
}

/// Return `(text, url)` for every `[text](url)` in `text` that is not the tail of an image.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let after_bang = i > 0 && bytes[i - 1] == b'!';
        if bytes[i] == b'[' && !after_bang {
            if let Some((label, url, end)) = match_bracketed(text, i) {
                out.push((label.to_string(), url.to_string()));
                i = end;
                continue;
            }
        }
        i += 1;
    }

    out
}

/// Shared driver for image and link splitting; `kind` selects the markup shape.
fn split_nodes_markup(nodes: Vec<TextNode>, kind: TextType) -> Result<Vec<TextNode>, ParseError> {
    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_plain() {
            out.push(node);
            continue;
        }

        let extracted = match kind {
            TextType::Image => extract_markdown_images(&node.text),
            _ => extract_markdown_links(&node.text),
        };
        if extracted.is_empty() {
            out.push(node);
            continue;
        }

        let mut working = node.text.as_str();
        for (label, url) in extracted {
            let markup = match kind {
                TextType::Image => format!("![{label}]({url})"),
                _ => format!("[{label}]({url})"),
            };
            let Some((before, after)) = working.split_once(markup.as_str()) else {
                return Err(ParseError::MalformedMarkup { kind: kind.as_str(), markup });
            };
            if !before.is_empty() {
                out.push(TextNode::new(before, TextType::Text));
            }
            out.push(match kind {
                TextType::Image => TextNode::image(label, url),
                _ => TextNode::link(label, url),
            });
            working = after;
        }

        if !working.is_empty() {
            out.push(TextNode::new(working, TextType::Text));
        }
    }

    Ok(out)
}

/// Replace `![alt](url)` markup in plain nodes with image nodes.
pub fn split_nodes_image(nodes: Vec<TextNode>) -> Result<Vec<TextNode>, ParseError> {
    split_nodes_markup(nodes, TextType::Image)
}

/// Replace `[text](url)` markup in plain nodes with link nodes.
pub fn split_nodes_link(nodes: Vec<TextNode>) -> Result<Vec<TextNode>, ParseError> {
    split_nodes_markup(nodes, TextType::Link)
}

/// Parse a run of inline Markdown into text nodes.
///
/// Stages run in a fixed order (bold `**`, italic `_`, code `` ` ``, images, links) and
/// each only looks at text still left plain by the earlier ones, so spans never nest.
pub fn text_to_textnodes(text: &str) -> Result<Vec<TextNode>, ParseError> {
    let nodes = vec![TextNode::new(text, TextType::Text)];
    let nodes = split_nodes_delimiter(nodes, "**", TextType::Bold)?;
    let nodes = split_nodes_delimiter(nodes, "_", TextType::Italic)?;
    let nodes = split_nodes_delimiter(nodes, "`", TextType::Code)?;
    let nodes = split_nodes_image(nodes)?;
    split_nodes_link(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(s: &str) -> TextNode {
        TextNode::new(s, TextType::Text)
    }

    #[test]
    fn formatted_nodes_pass_through() {
        let nodes = vec![TextNode::new("This is not **plain**", TextType::Bold)];
        let out = split_nodes_delimiter(nodes.clone(), "**", TextType::Bold).unwrap();
        assert_eq!(out, nodes);
    }

    #[test]
    fn splits_code_span() {
        let out = split_nodes_delimiter(vec![plain("This is a text with a `code block` word")], "`", TextType::Code)
            .unwrap();
        assert_eq!(
            out,
            vec![plain("This is a text with a "), TextNode::new("code block", TextType::Code), plain(" word")]
        );
    }

    #[test]
    fn keeps_space_between_adjacent_spans() {
        let out = text_to_textnodes("This is two **bold** **words**").unwrap();
        assert_eq!(
            out,
            vec![
                plain("This is two "),
                TextNode::new("bold", TextType::Bold),
                plain(" "),
                TextNode::new("words", TextType::Bold),
            ]
        );
    }

    #[test]
    fn drops_empty_pieces_at_edges() {
        let out = split_nodes_delimiter(vec![plain("**all bold**")], "**", TextType::Bold).unwrap();
        assert_eq!(out, vec![TextNode::new("all bold", TextType::Bold)]);
    }

    #[test]
    fn text_without_delimiter_is_unchanged() {
        let out = split_nodes_delimiter(vec![plain("nothing here")], "_", TextType::Italic).unwrap();
        assert_eq!(out, vec![plain("nothing here")]);
    }

    #[test]
    fn odd_delimiter_count_is_an_error() {
        let err = text_to_textnodes("a single ` tick").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnbalancedDelimiter { delimiter: "`".into(), text: "a single ` tick".into() }
        );
    }

    #[test]
    fn odd_bold_delimiters_are_an_error() {
        let nodes = vec![plain("This has an **uneven** **number of delimiters")];
        assert!(matches!(
            split_nodes_delimiter(nodes, "**", TextType::Bold),
            Err(ParseError::UnbalancedDelimiter { .. })
        ));
    }

    #[test]
    fn extracts_images() {
        let text = "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png)";
        assert_eq!(
            extract_markdown_images(text),
            vec![("image".to_string(), "https://i.imgur.com/zjjcJKZ.png".to_string())]
        );
    }

    #[test]
    fn extracts_links() {
        let text = "This is text with a link [to boot dev](https://www.boot.dev) and [to youtube](https://www.youtube.com)";
        assert_eq!(
            extract_markdown_links(text),
            vec![
                ("to boot dev".to_string(), "https://www.boot.dev".to_string()),
                ("to youtube".to_string(), "https://www.youtube.com".to_string()),
            ]
        );
    }

    #[test]
    fn image_is_not_also_a_link() {
        assert_eq!(extract_markdown_links("![a](u)"), Vec::<(String, String)>::new());
        assert_eq!(extract_markdown_images("![a](u)"), vec![("a".to_string(), "u".to_string())]);
    }

    #[test]
    fn link_is_not_an_image() {
        assert_eq!(extract_markdown_images("[a](u)"), Vec::<(String, String)>::new());
        assert_eq!(extract_markdown_links("[a](u)"), vec![("a".to_string(), "u".to_string())]);
    }

    #[test]
    fn nested_brackets_do_not_match() {
        assert!(extract_markdown_links("[a [b]](u)").is_empty());
        assert!(extract_markdown_links("[a](u (v))").is_empty());
        assert_eq!(extract_markdown_links("[a [b](u)"), vec![("b".to_string(), "u".to_string())]);
    }

    #[test]
    fn unterminated_markup_is_not_extracted() {
        assert!(extract_markdown_links("[text](https://x").is_empty());
        assert!(extract_markdown_images("![alt] (https://x)").is_empty());
    }

    #[test]
    fn extraction_keeps_empty_parts() {
        assert_eq!(extract_markdown_images("![](x.png)"), vec![(String::new(), "x.png".to_string())]);
    }

    #[test]
    fn splits_images() {
        let nodes = vec![plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_nodes_image(nodes).unwrap(),
            vec![
                plain("This is text with an "),
                TextNode::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                plain(" and another "),
                TextNode::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn splits_links_with_trailing_text() {
        let nodes = vec![plain("Go [home](/) now")];
        assert_eq!(split_nodes_link(nodes).unwrap(), vec![plain("Go "), TextNode::link("home", "/"), plain(" now")]);
    }

    #[test]
    fn repeated_markup_splits_in_order() {
        let nodes = vec![plain("[x](u) and [x](u)")];
        assert_eq!(
            split_nodes_link(nodes).unwrap(),
            vec![TextNode::link("x", "u"), plain(" and "), TextNode::link("x", "u")]
        );
    }

    #[test]
    fn image_split_leaves_links_alone() {
        let nodes = vec![plain("[link](u)")];
        assert_eq!(split_nodes_image(nodes).unwrap(), vec![plain("[link](u)")]);
    }

    #[test]
    fn parses_every_inline_kind() {
        let text = "This is **text** with an _italic_ word and a `code block` and an ![obi wan image](https://i.imgur.com/fJRm4Vk.jpeg) and a [link](https://boot.dev)";
        assert_eq!(
            text_to_textnodes(text).unwrap(),
            vec![
                plain("This is "),
                TextNode::new("text", TextType::Bold),
                plain(" with an "),
                TextNode::new("italic", TextType::Italic),
                plain(" word and a "),
                TextNode::new("code block", TextType::Code),
                plain(" and an "),
                TextNode::image("obi wan image", "https://i.imgur.com/fJRm4Vk.jpeg"),
                plain(" and a "),
                TextNode::link("link", "https://boot.dev"),
            ]
        );
    }

    #[test]
    fn earlier_stages_win_over_later_ones() {
        let out = text_to_textnodes("**a `b` c**").unwrap();
        assert_eq!(out, vec![TextNode::new("a `b` c", TextType::Bold)]);
    }

    #[test]
    fn markup_inside_code_is_left_alone() {
        let out = text_to_textnodes("see `[x](y)`").unwrap();
        assert_eq!(out, vec![plain("see "), TextNode::new("[x](y)", TextType::Code)]);
    }

    #[test]
    fn parsing_is_deterministic() {
        let text = "mix **b** _i_ `c` [l](u)";
        assert_eq!(text_to_textnodes(text).unwrap(), text_to_textnodes(text).unwrap());
    }

    #[test]
    fn empty_text_yields_single_empty_plain_node() {
        assert_eq!(text_to_textnodes("").unwrap(), vec![plain("")]);
    }
}
