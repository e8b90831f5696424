use std::{fs, path::Path};

use roxmltree::{Document, Node, ParsingOptions};

use crate::core::{
    ExportError,
    data::{PluralItem, ResourceEntry},
};

const STRING_TAG: &str = "string";
const PLURALS_TAG: &str = "plurals";
const STRING_ARRAY_TAG: &str = "string-array";
const ITEM_TAG: &str = "item";

const NAME_ATTR: &str = "name";
const QUANTITY_ATTR: &str = "quantity";
const TRANSLATABLE_ATTR: &str = "translatable";

/// Read and parse one locale's resource file.
pub fn parse_resource_file(path: &Path) -> Result<Vec<ResourceEntry>, ExportError> {
    let content = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
    parse_resource_str(&content, path)
}

/// Parse a resource document into entries, in document order.
///
/// Only direct children of the root element are considered: comments,
/// `string`, `plurals` and `string-array`. Any other node is skipped so that
/// unknown resource types (`dimen`, `color`, ...) never abort the parse.
///
/// `path` is only used for error reporting.
pub fn parse_resource_str(content: &str, path: &Path) -> Result<Vec<ResourceEntry>, ExportError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(content, options)
        .map_err(|e| ExportError::malformed(path, e.to_string()))?;

    let mut entries = Vec::new();
    for node in doc.root_element().children() {
        if node.is_comment() {
            entries.push(ResourceEntry::comment(node.text().unwrap_or_default()));
            continue;
        }
        if !node.is_element() {
            continue;
        }

        match node.tag_name().name() {
            STRING_TAG => {
                let name = required_attr(node, NAME_ATTR, path)?;
                let translatable = node.attribute(TRANSLATABLE_ATTR) != Some("false");
                entries.push(ResourceEntry::SimpleString {
                    name,
                    text: text_content(node),
                    translatable,
                });
            }
            PLURALS_TAG => {
                let name = required_attr(node, NAME_ATTR, path)?;
                let items = item_children(node)
                    .map(|item| {
                        Ok(PluralItem {
                            quantity: required_attr(item, QUANTITY_ATTR, path)?,
                            text: text_content(item),
                        })
                    })
                    .collect::<Result<Vec<_>, ExportError>>()?;
                entries.push(ResourceEntry::PluralSet { name, items });
            }
            STRING_ARRAY_TAG => {
                let name = required_attr(node, NAME_ATTR, path)?;
                let items = item_children(node).map(text_content).collect();
                entries.push(ResourceEntry::StringArray { name, items });
            }
            _ => {}
        }
    }

    Ok(entries)
}

fn required_attr(node: Node, attr: &str, path: &Path) -> Result<String, ExportError> {
    node.attribute(attr).map(str::to_string).ok_or_else(|| {
        let pos = node.document().text_pos_at(node.range().start);
        ExportError::malformed(
            path,
            format!(
                "<{}> at line {} is missing the '{}' attribute",
                node.tag_name().name(),
                pos.row,
                attr
            ),
        )
    })
}

fn item_children<'a, 'input>(node: Node<'a, 'input>) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(|child| child.is_element() && child.tag_name().name() == ITEM_TAG)
}

/// Concatenated text of all descendant text nodes, so inline markup such as
/// `<xliff:g>` or `<b>` keeps its inner text.
fn text_content(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
