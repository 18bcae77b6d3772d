use indexmap::IndexMap;

use super::escape::escape_text;
use crate::types::constants::{
    doctype_line, DEFAULT_INDENT, PLIST_VERSION, TAG_DICT, TAG_KEY, TAG_PLIST, TAG_STRING, UUID_KEY, XML_DECLARATION,
};
use crate::types::{PlistDocument, PlistNode};

/// Options for the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterOptions {
    /// One level of indentation.
    pub indent: String,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

/// Serializes a PlistDocument to indented XML text.
pub struct Writer {
    buf: String,
    indent: usize,
    // Pre-computed indent strings for levels 0..MAX_INDENT
    indents: Vec<String>,
}

const MAX_CACHED_INDENT: usize = 8;

impl Writer {
    pub fn new(document: &PlistDocument) -> Self {
        Self::with_options(document, &WriterOptions::default())
    }

    pub fn with_options(document: &PlistDocument, options: &WriterOptions) -> Self {
        let mut indents = Vec::with_capacity(MAX_CACHED_INDENT + 1);
        for i in 0..=MAX_CACHED_INDENT {
            indents.push(options.indent.repeat(i));
        }

        // Prolog plus the node tree
        let estimated_size = 256 + document.root.as_ref().map_or(0, estimate_size);

        let mut writer = Writer {
            buf: String::with_capacity(estimated_size),
            indent: 0,
            indents,
        };
        writer.write_prolog();
        writer.write_document(document);
        writer
    }

    pub fn get_results(self) -> String {
        self.buf
    }

    // ── Core write primitives ──────────────────────────────────────

    #[inline(always)]
    fn write_indent(&mut self) {
        if self.indent <= MAX_CACHED_INDENT {
            self.buf.push_str(&self.indents[self.indent]);
        } else {
            for _ in 0..self.indent {
                self.buf.push_str(&self.indents[1]);
            }
        }
    }

    #[inline(always)]
    fn write_line(&mut self, s: &str) {
        self.write_indent();
        self.buf.push_str(s);
        self.buf.push('\n');
    }

    fn write_open_tag(&mut self, tag: &str) {
        self.write_indent();
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn write_close_tag(&mut self, tag: &str) {
        self.write_indent();
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    fn write_empty_tag(&mut self, tag: &str) {
        self.write_indent();
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push_str("/>\n");
    }

    /// `<tag>text</tag>` on a single line.
    fn write_leaf(&mut self, tag: &str, text: &str) {
        self.write_indent();
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push('>');
        self.buf.push_str(&escape_text(text));
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push_str(">\n");
    }

    // ── Structure writers ──────────────────────────────────────────

    fn write_prolog(&mut self) {
        self.write_line(XML_DECLARATION);
        self.write_line(&doctype_line());
    }

    fn write_document(&mut self, document: &PlistDocument) {
        self.write_indent();
        self.buf.push('<');
        self.buf.push_str(TAG_PLIST);
        self.buf.push_str(" version=\"");
        self.buf.push_str(PLIST_VERSION);
        self.buf.push('"');

        let Some(root) = &document.root else {
            self.buf.push_str("/>\n");
            return;
        };
        self.buf.push_str(">\n");
        self.indent += 1;
        match (root, document.uuid()) {
            (PlistNode::Dict(map), Some(uuid)) => self.write_dict(map, Some(uuid)),
            _ => self.write_node(root),
        }
        self.indent -= 1;
        self.write_close_tag(TAG_PLIST);
    }

    fn write_node(&mut self, node: &PlistNode) {
        match node {
            PlistNode::String(s) => self.write_leaf(node.tag(), s),
            PlistNode::Array(items) => {
                if items.is_empty() {
                    self.write_empty_tag(node.tag());
                    return;
                }
                self.write_open_tag(node.tag());
                self.indent += 1;
                for item in items {
                    self.write_node(item);
                }
                self.indent -= 1;
                self.write_close_tag(node.tag());
            }
            PlistNode::Dict(map) => self.write_dict(map, None),
        }
    }

    /// Write a dict, optionally led by a `uuid` pair ahead of its own entries.
    fn write_dict(&mut self, map: &IndexMap<String, PlistNode>, uuid: Option<&str>) {
        if map.is_empty() && uuid.is_none() {
            self.write_empty_tag(TAG_DICT);
            return;
        }
        self.write_open_tag(TAG_DICT);
        self.indent += 1;
        if let Some(uuid) = uuid {
            self.write_leaf(TAG_KEY, UUID_KEY);
            self.write_leaf(TAG_STRING, uuid);
        }
        for (key, value) in map {
            self.write_leaf(TAG_KEY, key);
            self.write_node(value);
        }
        self.indent -= 1;
        self.write_close_tag(TAG_DICT);
    }
}

/// Rough estimate of output size from a PlistNode tree.
fn estimate_size(node: &PlistNode) -> usize {
    match node {
        PlistNode::String(s) => s.len() + 24,
        PlistNode::Array(items) => items.iter().map(estimate_size).sum::<usize>() + 24,
        PlistNode::Dict(map) => map.iter().map(|(k, v)| k.len() + 18 + estimate_size(v)).sum::<usize>() + 22,
    }
}

/// Serialize a PlistDocument with the default four-space indentation.
pub fn build(document: &PlistDocument) -> String {
    Writer::new(document).get_results()
}

pub fn build_with_options(document: &PlistDocument, options: &WriterOptions) -> String {
    Writer::with_options(document, options).get_results()
}
