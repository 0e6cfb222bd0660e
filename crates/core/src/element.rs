//! The generic element builder.
//!
//! An [`Element`] collects a tag name, attributes, class names, inline style
//! declarations and children, then serializes them with a fixed layout: every
//! opening tag starts on a new line and every closing (or void) tag is followed
//! by a newline.
//!
//! `class` and `style` are materialized only when the element is rendered, so
//! classes and styles can be added in any order and always win over a `class`
//! or `style` attribute that was set directly.

use crate::attribute::{AttrValue, Attributes, Encoded};
use crate::context::Context;
use crate::error::RenderError;
use crate::escape::{escape_attribute_bytes, escape_attribute_value};
use crate::node::{BoxedNode, Node, Text};
use itertools::Itertools;
use log::trace;
use std::borrow::Cow;
use std::fmt;

/// How the end of an element is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndTag {
    /// `<tag>children</tag>`
    #[default]
    Required,
    /// `<tag>` with no end tag; children are never rendered.
    Omitted,
    /// `<tag/>`; children are never rendered.
    SelfClosing,
}

/// Builder for a single markup element.
#[derive(Clone)]
pub struct Element {
    tag: String,
    end_tag: EndTag,
    attrs: Attributes,
    class_names: Vec<String>,
    styles: Vec<String>,
    children: Vec<BoxedNode>,
}

/// Shorthand for [`Element::new`].
pub fn tag(name: impl Into<String>) -> Element {
    Element::new(name)
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            end_tag: EndTag::default(),
            attrs: Attributes::new(),
            class_names: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn set_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Marks this as a void element: no end tag, children are ignored.
    pub fn mark_void(mut self) -> Self {
        self.end_tag = EndTag::Omitted;
        self
    }

    /// Renders as `<tag/>`; children are ignored.
    pub fn self_closing(mut self) -> Self {
        self.end_tag = EndTag::SelfClosing;
        self
    }

    // --- Children ---

    /// Replaces all children.
    pub fn children(mut self, children: impl IntoIterator<Item = BoxedNode>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Replaces all children with a single text node.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.children([Box::new(Text::new(content)) as BoxedNode])
    }

    pub fn child(mut self, child: impl Node + 'static) -> Self {
        self.push_child(child);
        self
    }

    pub fn append_children(mut self, children: impl IntoIterator<Item = BoxedNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn prepend_children(mut self, children: impl IntoIterator<Item = BoxedNode>) -> Self {
        let mut merged: Vec<BoxedNode> = children.into_iter().collect();
        merged.append(&mut self.children);
        self.children = merged;
        self
    }

    pub fn push_child(&mut self, child: impl Node + 'static) {
        self.children.push(Box::new(child));
    }

    // --- Attributes ---

    /// Sets an attribute in place; an existing key keeps its position.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.set(key, value);
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn attrs<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        for (key, value) in pairs {
            self.set_attr(key, value);
        }
        self
    }

    pub fn attr_if(self, key: impl Into<String>, value: impl Into<AttrValue>, cond: bool) -> Self {
        if cond { self.attr(key, value) } else { self }
    }

    /// Sets a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attr(format!("data-{key}"), value)
    }

    // --- Classes and inline styles ---

    /// Adds one or more whitespace-separated class names.
    pub fn class(mut self, names: &str) -> Self {
        self.add_class(names);
        self
    }

    pub fn classes<S: AsRef<str>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        for name in names {
            self.add_class(name.as_ref());
        }
        self
    }

    pub fn class_if(self, names: &str, cond: bool) -> Self {
        if cond { self.class(names) } else { self }
    }

    pub fn add_class(&mut self, names: &str) {
        self.class_names
            .extend(names.split_whitespace().map(str::to_string));
    }

    /// Adds an inline style declaration such as `color: red`.
    pub fn style(mut self, declaration: &str) -> Self {
        self.add_style(declaration);
        self
    }

    pub fn style_if(self, declaration: &str, cond: bool) -> Self {
        if cond { self.style(declaration) } else { self }
    }

    pub fn add_style(&mut self, declaration: &str) {
        let declaration = declaration.trim().trim_end_matches(';').trim_end();
        if !declaration.is_empty() {
            self.styles.push(declaration.to_string());
        }
    }

    // --- Accessors ---

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    pub fn end_tag(&self) -> EndTag {
        self.end_tag
    }

    pub fn is_void(&self) -> bool {
        self.end_tag != EndTag::Required
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn style_fragments(&self) -> &[String] {
        &self.styles
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The attributes as they will be rendered, with `class` and `style`
    /// synthesized from the collected class names and declarations.
    pub fn resolved_attributes(&self) -> Cow<'_, Attributes> {
        if self.class_names.is_empty() && self.styles.is_empty() {
            return Cow::Borrowed(&self.attrs);
        }

        let mut attrs = self.attrs.clone();
        let class = self.class_names.iter().join(" ");
        let class = class.trim();
        if !class.is_empty() {
            attrs.set("class", class);
        }
        if !self.styles.is_empty() {
            attrs.set("style", format!("{};", self.styles.iter().join("; ")));
        }
        Cow::Owned(attrs)
    }
}

fn write_attributes(attrs: &Attributes, out: &mut Vec<u8>) -> Result<(), RenderError> {
    for attr in attrs.iter() {
        let encoded = attr.value.encode().map_err(|source| RenderError::Encode {
            attribute: attr.key.clone(),
            source,
        })?;
        match encoded {
            Encoded::Omit => {}
            Encoded::Bare => {
                out.push(b' ');
                out.extend_from_slice(attr.key.as_bytes());
            }
            Encoded::Value(value) => {
                out.push(b' ');
                out.extend_from_slice(attr.key.as_bytes());
                out.extend_from_slice(b"='");
                out.extend_from_slice(escape_attribute_value(&value).as_bytes());
                out.push(b'\'');
            }
            Encoded::Bytes(value) => {
                out.push(b' ');
                out.extend_from_slice(attr.key.as_bytes());
                out.extend_from_slice(b"='");
                escape_attribute_bytes(&value, out);
                out.push(b'\'');
            }
        }
    }
    Ok(())
}

impl Node for Element {
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        trace!(
            "Rendering <{}> ({} attributes, {} children, {:?})",
            self.tag,
            self.attrs.len(),
            self.children.len(),
            self.end_tag
        );

        out.extend_from_slice(b"\n<");
        out.extend_from_slice(self.tag.as_bytes());
        write_attributes(&self.resolved_attributes(), out)?;

        match self.end_tag {
            EndTag::Omitted => out.extend_from_slice(b">\n"),
            EndTag::SelfClosing => out.extend_from_slice(b"/>\n"),
            EndTag::Required => {
                out.push(b'>');
                for child in &self.children {
                    child.render_into(ctx, out)?;
                }
                out.extend_from_slice(b"</");
                out.extend_from_slice(self.tag.as_bytes());
                out.extend_from_slice(b">\n");
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("tag", &self.tag)
            .field("end_tag", &self.end_tag)
            .field("attrs", &self.attrs)
            .field("class_names", &self.class_names)
            .field("styles", &self.styles)
            .field("children", &self.children.len())
            .finish()
    }
}

macro_rules! string_attr_setters {
    ($($method:ident => $key:literal),+ $(,)?) => {
        impl Element {
            $(
                #[doc = concat!("Sets the `", $key, "` attribute.")]
                pub fn $method(self, value: impl Into<String>) -> Self {
                    self.attr($key, value.into())
                }
            )+
        }
    };
}

macro_rules! bool_attr_setters {
    ($($method:ident => $key:literal),+ $(,)?) => {
        impl Element {
            $(
                #[doc = concat!("Renders a bare `", $key, "` when true, nothing when false.")]
                pub fn $method(self, value: bool) -> Self {
                    self.attr($key, value)
                }
            )+
        }
    };
}

string_attr_setters! {
    id => "id",
    href => "href",
    rel => "rel",
    src => "src",
    value => "value",
    type_ => "type",
    role => "role",
    alt => "alt",
    target => "target",
    name => "name",
    placeholder => "placeholder",
    action => "action",
    method => "method",
    content => "content",
    charset => "charset",
    property => "property",
    title => "title",
    for_ => "for",
    lang => "lang",
}

bool_attr_setters! {
    disabled => "disabled",
    checked => "checked",
    required => "required",
    readonly => "readonly",
    selected => "selected",
    multiple => "multiple",
    autofocus => "autofocus",
    hidden => "hidden",
}

impl Element {
    pub fn tab_index(self, index: i64) -> Self {
        self.attr("tabindex", index)
    }
}

/// Sets a flat list of attributes on an element.
///
/// A trailing key without a value is padded with an empty value, which
/// renders as nothing.
///
/// ```
/// use tagsmith_core::{attrs, Context, Element, Node};
///
/// let el = attrs!(Element::new("div"), "class" => "menu", "id" => "the-menu", "style");
/// let html = el.render(&Context::new()).unwrap();
/// assert_eq!(html, b"\n<div class='menu' id='the-menu'></div>\n");
/// ```
#[macro_export]
macro_rules! attrs {
    ($el:expr $(,)?) => {
        $el
    };
    ($el:expr, $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $crate::attrs!($el.attr($key, $value) $(, $($rest)*)?)
    };
    ($el:expr, $key:expr $(,)?) => {
        $el.attr($key, "")
    };
}
