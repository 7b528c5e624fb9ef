/// Structural type of a block produced by [`markdown_to_blocks`](crate::markdown_to_blocks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockType::Paragraph => "paragraph",
            BlockType::Heading => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
        };
        f.write_str(name)
    }
}

const FENCE: &str = "```";

/// Classify a trimmed block. The first matching rule wins:
/// heading, code, quote, unordered list, ordered list, then paragraph.
pub fn block_to_block_type(block: &str) -> BlockType {
    if heading_level(block).is_some() {
        BlockType::Heading
    } else if is_code(block) {
        BlockType::Code
    } else if is_quote(block) {
        BlockType::Quote
    } else if is_unordered_list(block) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Level of a single-line ATX heading (`#` through `######`, one space, text).
pub fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let text = block[hashes..].strip_prefix(' ')?;
    if text.is_empty() || text.contains('\n') {
        return None;
    }
    Some(hashes as u8)
}

fn is_code(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn is_quote(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with("- "))
}

fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| ordered_marker_len(line).is_some_and(|(n, _)| n == i + 1))
}

/// Parse an `N.` marker followed by whitespace, returning `N` and the marker's byte length.
///
/// `N` must be written without leading zeros, so `01.` is not a marker.
pub(crate) fn ordered_marker_len(line: &str) -> Option<(usize, usize)> {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 || bytes[0] == b'0' || bytes.get(i) != Some(&b'.') {
        return None;
    }
    let after_dot = line[i + 1..].chars().next()?;
    if !after_dot.is_whitespace() {
        return None;
    }
    let n = line[..i].parse().ok()?;
    Some((n, i + 1))
}
