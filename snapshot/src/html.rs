use std::fmt::{self, Write as _};

use v_htmlescape::escape;

use crate::helpers::Callback;

/// Attribute the wasm mount uses to route clicks back to a handler
pub const HANDLER_ATTRIBUTE: &str = "data-snapshot-handler";

/// Rendered output of a component
///
/// An owned tree of elements and text. Click handlers travel with the elements
/// they belong to, so the runtime can find them again after a render.
#[derive(Debug, Clone)]
pub enum Html {
    /// A tag with attributes, children and an optional click handler
    Element(Element),
    /// Escaped text
    Text(String),
    /// Siblings without a wrapping tag
    Fragment(Vec<Html>),
}

impl Default for Html {
    fn default() -> Self {
        Html::Fragment(Vec::new())
    }
}

impl Html {
    /// Start building an element
    pub fn element(tag: impl Into<String>) -> Element {
        Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            on_click: None,
        }
    }

    /// A text node
    pub fn text(content: impl Into<String>) -> Self {
        Html::Text(content.into())
    }

    /// Siblings without a wrapper
    pub fn fragment(children: impl IntoIterator<Item = Html>) -> Self {
        Html::Fragment(children.into_iter().collect())
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Html::Text(text) => out.push_str(text),
            Html::Fragment(children) => children.iter().for_each(|child| child.collect_text(out)),
            Html::Element(element) => element
                .children
                .iter()
                .for_each(|child| child.collect_text(out)),
        }
    }

    /// The click handler of the first element whose trimmed text equals `label`
    pub fn find_control(&self, label: &str) -> Option<Callback> {
        match self {
            Html::Text(_) => None,
            Html::Fragment(children) => children.iter().find_map(|child| child.find_control(label)),
            Html::Element(element) => {
                if let Some(callback) = element.click_handler() {
                    if self.text_content().trim() == label {
                        return Some(callback.clone());
                    }
                }
                element
                    .children
                    .iter()
                    .find_map(|child| child.find_control(label))
            }
        }
    }

    /// Every click handler in document order
    ///
    /// Indices into this list match the numbers written by
    /// [`Html::to_html_with_handlers`].
    pub fn handlers(&self) -> Vec<Callback> {
        let mut handlers = Vec::new();
        self.collect_handlers(&mut handlers);
        handlers
    }

    fn collect_handlers(&self, handlers: &mut Vec<Callback>) {
        match self {
            Html::Text(_) => {}
            Html::Fragment(children) => children
                .iter()
                .for_each(|child| child.collect_handlers(handlers)),
            Html::Element(element) => {
                if let Some(callback) = element.click_handler() {
                    handlers.push(callback.clone());
                }
                element
                    .children
                    .iter()
                    .for_each(|child| child.collect_handlers(handlers));
            }
        }
    }

    /// Serialize with a `data-snapshot-handler` index on every clickable element
    pub fn to_html_with_handlers(&self) -> String {
        let mut writer = HtmlWriter::new(true);
        writer.write(self);
        writer.out
    }
}

/// Builder and node type for tags
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Html>,
    on_click: Option<Callback>,
}

impl Element {
    /// Set an attribute, replacing an earlier value with the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Set the `class` attribute
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Set the inline `style` attribute
    pub fn style(self, style: impl Into<String>) -> Self {
        self.attr("style", style)
    }

    /// Append a child node
    pub fn child(mut self, child: impl Into<Html>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a text child
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Html::text(content))
    }

    /// Attach the handler run when this element is clicked
    pub fn on_click(mut self, callback: Callback) -> Self {
        self.on_click = Some(callback);
        self
    }

    /// Value of attribute `name`, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Handler run on click, if any
    pub fn click_handler(&self) -> Option<&Callback> {
        self.on_click.as_ref()
    }
}

impl From<Element> for Html {
    fn from(element: Element) -> Self {
        Html::Element(element)
    }
}

impl From<&str> for Html {
    fn from(content: &str) -> Self {
        Html::Text(content.to_owned())
    }
}

impl From<String> for Html {
    fn from(content: String) -> Self {
        Html::Text(content)
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = HtmlWriter::new(false);
        writer.write(self);
        f.write_str(&writer.out)
    }
}

struct HtmlWriter {
    out: String,
    number_handlers: bool,
    next_handler: usize,
}

impl HtmlWriter {
    fn new(number_handlers: bool) -> Self {
        Self {
            out: String::new(),
            number_handlers,
            next_handler: 0,
        }
    }

    fn push_escaped(&mut self, raw: &str) {
        // Writing into a String cannot fail
        let _ = write!(self.out, "{}", escape(raw));
    }

    fn write(&mut self, node: &Html) {
        match node {
            Html::Text(text) => self.push_escaped(text),
            Html::Fragment(children) => {
                for child in children {
                    self.write(child);
                }
            }
            Html::Element(element) => {
                self.out.push('<');
                self.out.push_str(&element.tag);

                for (name, value) in &element.attributes {
                    self.out.push(' ');
                    self.out.push_str(name);
                    self.out.push_str("=\"");
                    self.push_escaped(value);
                    self.out.push('"');
                }

                if self.number_handlers && element.click_handler().is_some() {
                    let index = self.next_handler;
                    self.next_handler += 1;
                    self.out
                        .push_str(&format!(" {HANDLER_ATTRIBUTE}=\"{index}\""));
                }

                self.out.push('>');

                for child in &element.children {
                    self.write(child);
                }

                self.out.push_str("</");
                self.out.push_str(&element.tag);
                self.out.push('>');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::noop_callback;

    #[test]
    fn renders_nested_elements() {
        let html: Html = Html::element("div")
            .class("App")
            .child(Html::element("p").text("Count is: 0"))
            .child(Html::element("button").on_click(noop_callback()).text("Go"))
            .into();

        assert_eq!(
            html.to_string(),
            "<div class=\"App\"><p>Count is: 0</p><button>Go</button></div>"
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let html: Html = Html::element("span")
            .attr("title", "say \"hi\" & <bye>")
            .text("1 < 2 && \"quoted\"")
            .into();

        assert_eq!(
            html.to_string(),
            "<span title=\"say &quot;hi&quot; &amp; &lt;bye&gt;\">1 &lt; 2 &amp;&amp; &quot;quoted&quot;</span>"
        );
    }

    #[test]
    fn repeated_attribute_replaces_value() {
        let element = Html::element("div").class("a").class("b");
        assert_eq!(element.attribute("class"), Some("b"));
        assert_eq!(Html::from(element).to_string(), "<div class=\"b\"></div>");
    }

    #[test]
    fn finds_controls_by_label() {
        let first = noop_callback();
        let second = noop_callback();
        let html = Html::fragment([
            Html::from(Html::element("button").on_click(first.clone()).text(" Log ")),
            Html::from(
                Html::element("div")
                    .child(Html::element("button").on_click(second.clone()).text("Increment")),
            ),
            Html::from(Html::element("button").text("Inert")),
        ]);

        assert!(html.find_control("Log").unwrap().ptr_eq(&first));
        assert!(html.find_control("Increment").unwrap().ptr_eq(&second));
        assert!(html.find_control("Inert").is_none());
        assert!(html.find_control("Missing").is_none());
        assert_eq!(html.text_content(), " Log IncrementInert");
    }

    #[test]
    fn numbers_handlers_in_document_order() {
        let first = noop_callback();
        let second = noop_callback();
        let html: Html = Html::element("div")
            .child(Html::element("button").on_click(first.clone()).text("a"))
            .child(Html::element("button").on_click(second.clone()).text("b"))
            .into();

        assert_eq!(
            html.to_html_with_handlers(),
            "<div><button data-snapshot-handler=\"0\">a</button><button data-snapshot-handler=\"1\">b</button></div>"
        );

        let handlers = html.handlers();
        assert_eq!(handlers.len(), 2);
        assert!(handlers[0].ptr_eq(&first));
        assert!(handlers[1].ptr_eq(&second));
    }
}
