use quick_xml::events::Event;
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

const INDENT: usize = 2;

/// Re-serializes an XML document with normalized two-space indentation.
///
/// Whitespace-only text nodes are dropped so the original formatting does
/// not leak through; element order, attributes, and text content are
/// preserved verbatim. The output is semantically equivalent to the input
/// but not byte-identical to it.
pub fn reindent(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);

    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Text(text) => {
                if text.unescape()?.trim().is_empty() {
                    continue;
                }
                if seen_root && depth == 0 {
                    return Err(Error::TrailingContent);
                }
                writer.write_event(Event::Text(text))?;
            }
            event @ Event::Start(_) => {
                // quick-xml does not enforce the single-root rule itself
                if seen_root && depth == 0 {
                    return Err(Error::TrailingContent);
                }
                depth += 1;
                seen_root = true;
                writer.write_event(event)?;
            }
            event @ Event::End(_) => {
                // mismatched names are caught by the reader itself
                depth = depth.saturating_sub(1);
                writer.write_event(event)?;
            }
            event @ Event::Empty(_) => {
                if seen_root && depth == 0 {
                    return Err(Error::TrailingContent);
                }
                seen_root = true;
                writer.write_event(event)?;
            }
            event => writer.write_event(event)?,
        }
    }

    if depth != 0 {
        return Err(Error::UnclosedElements(depth));
    }
    if !seen_root {
        return Err(Error::MissingRoot);
    }

    Ok(String::from_utf8(writer.into_inner())?)
}
