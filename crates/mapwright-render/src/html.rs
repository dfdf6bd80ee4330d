//! Minimal DOM-like tree for the widget's HTML fragment.
//!
//! Only what the renderer needs: elements with ordered attributes, classes,
//! text children (escaped via `htmlize`) and raw-HTML children (sanitized
//! info-window templates, emitted verbatim).

#[derive(Debug, Clone)]
pub enum HtmlNode {
    Element(HtmlElement),
    Text(String),
    RawHtml(String),
}

#[derive(Debug, Clone)]
pub struct HtmlElement {
    tag: String,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    children: Vec<HtmlNode>,
}

impl HtmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.classes.push(name.into());
        self
    }

    pub fn child(mut self, child: HtmlElement) -> Self {
        self.children.push(HtmlNode::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(HtmlNode::Text(text.into()));
        self
    }

    /// Appends pre-sanitized HTML emitted without escaping.
    pub fn raw_html(mut self, html: impl Into<String>) -> Self {
        self.children.push(HtmlNode::RawHtml(html.into()));
        self
    }

    pub fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&htmlize::escape_attribute(value));
            out.push('"');
        }
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            for (i, class) in self.classes.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&htmlize::escape_attribute(class));
            }
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            match child {
                HtmlNode::Element(element) => element.write_into(out),
                HtmlNode::Text(text) => out.push_str(&htmlize::escape_text(text)),
                HtmlNode::RawHtml(html) => out.push_str(html),
            }
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_attributes_in_insertion_order() {
        let el = HtmlElement::new("div")
            .attr("id", "map1")
            .attr("style", "display: none");
        assert_eq!(el.to_html(), r#"<div id="map1" style="display: none"></div>"#);
    }

    #[test]
    fn escapes_attribute_values_and_text() {
        let el = HtmlElement::new("div")
            .attr("title", r#"a "b" & c"#)
            .text("1 < 2 & 3");
        assert_eq!(
            el.to_html(),
            r#"<div title="a &quot;b&quot; &amp; c">1 &lt; 2 &amp; 3</div>"#
        );
    }

    #[test]
    fn raw_html_is_not_escaped() {
        let el = HtmlElement::new("div").class("content").raw_html("<b>hi</b>");
        assert_eq!(el.to_html(), r#"<div class="content"><b>hi</b></div>"#);
    }

    #[test]
    fn nested_children_render_depth_first() {
        let el = HtmlElement::new("div")
            .attr("id", "outer")
            .child(HtmlElement::new("div").attr("id", "inner").text("x"));
        assert_eq!(
            el.to_html(),
            r#"<div id="outer"><div id="inner">x</div></div>"#
        );
    }
}
