//! SVG document serialization.

use crate::graph::SceneGraph;
use crate::render::{render, RenderSink};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// A [`RenderSink`] that produces a standalone SVG document string.
///
/// Elements without children self-close; nesting is indented two spaces.
pub struct SvgWriter {
    out: String,
    depth: usize,
    tag_open: bool,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            out: String::from(XML_HEADER),
            depth: 0,
            tag_open: false,
        }
    }

    /// Close the document element and return the finished string.
    pub fn finish(mut self) -> String {
        if self.tag_open {
            self.out.push_str(" />\n");
        } else if self.depth > 0 {
            self.out.push_str("</svg>\n");
        }
        self.out
    }

    fn flush_open_tag(&mut self) {
        if self.tag_open {
            self.out.push_str(">\n");
            self.tag_open = false;
        }
    }

    fn indent(&mut self) {
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
    }
}

impl RenderSink for SvgWriter {
    fn open_root(&mut self) {
        self.out.push_str("<svg xmlns=\"");
        self.out.push_str(SVG_NS);
        self.out.push('"');
        self.tag_open = true;
        self.depth = 1;
    }

    fn open(&mut self, kind: &str) {
        self.flush_open_tag();
        self.indent();
        self.out.push('<');
        self.out.push_str(kind);
        self.tag_open = true;
        self.depth += 1;
    }

    fn attr(&mut self, key: &str, value: &str) {
        self.out.push(' ');
        self.out.push_str(key);
        self.out.push_str("=\"");
        push_escaped(&mut self.out, value);
        self.out.push('"');
    }

    fn close(&mut self, kind: &str) {
        self.depth -= 1;
        if self.tag_open {
            self.out.push_str(" />\n");
            self.tag_open = false;
        } else {
            self.indent();
            self.out.push_str("</");
            self.out.push_str(kind);
            self.out.push_str(">\n");
        }
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Serialize a scene graph to an SVG document string.
pub fn write_svg(graph: &SceneGraph) -> String {
    let mut writer = SvgWriter::new();
    render(graph, &mut writer);
    writer.finish()
}
