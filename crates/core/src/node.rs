use crate::context::Context;
use crate::error::RenderError;
use crate::escape::escape_text;

/// A helper trait for cloning trait objects of `Node`.
pub trait CloneNode {
    fn clone_box(&self) -> Box<dyn Node>;
}

impl<T> CloneNode for T
where
    T: 'static + Node + Clone,
{
    fn clone_box(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Node> {
    fn clone(&self) -> Box<dyn Node> {
        (**self).clone_box()
    }
}

/// The central trait for everything that renders to HTML.
///
/// It allows for polymorphic composition: elements, text, conditionals and
/// caller-defined components can all be stored side by side as children.
/// Implement it for your own types to create reusable components.
///
/// ```
/// use tagsmith_core::{Context, Element, Node, RenderError, Text};
///
/// #[derive(Clone)]
/// struct Badge(String);
///
/// impl Node for Badge {
///     fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
///         Element::new("span")
///             .class("badge")
///             .child(Text::new(&self.0))
///             .render_into(ctx, out)
///     }
/// }
///
/// let html = Badge("new".into()).render(&Context::new()).unwrap();
/// assert_eq!(html, b"\n<span class='badge'>new</span>\n");
/// ```
pub trait Node: CloneNode + Send + Sync {
    /// Appends the rendered bytes of this node to `out`.
    ///
    /// On error the contents of `out` are unspecified and must be discarded.
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError>;

    /// Renders this node into a fresh buffer.
    fn render(&self, ctx: &Context) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        self.render_into(ctx, &mut out)?;
        Ok(out)
    }
}

pub type BoxedNode = Box<dyn Node>;

impl Node for Box<dyn Node> {
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        (**self).render_into(ctx, out)
    }
}

/// An absent node renders nothing.
impl<N> Node for Option<N>
where
    N: Node + Clone + 'static,
{
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        match self {
            Some(node) => node.render_into(ctx, out),
            None => Ok(()),
        }
    }
}

/// Markup that is emitted verbatim, without escaping.
///
/// Only use this for trusted fragments: inline scripts and stylesheets, or
/// markup that was rendered earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Raw {
    payload: Vec<u8>,
}

impl Raw {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            payload: html.into().into_bytes(),
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { payload: bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }
}

impl Node for Raw {
    fn render_into(&self, _ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        out.extend_from_slice(&self.payload);
        Ok(())
    }
}

/// Plain text, escaped when rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Node for Text {
    fn render_into(&self, _ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        out.extend_from_slice(escape_text(&self.content).as_bytes());
        Ok(())
    }
}

/// Builds a [`Text`] node from a format string.
#[macro_export]
macro_rules! textf {
    ($($arg:tt)*) => {
        $crate::Text::new(format!($($arg)*))
    };
}

/// Collects heterogeneous nodes into a `Vec<BoxedNode>`.
///
/// ```
/// use tagsmith_core::{nodes, Raw, Text};
///
/// let children = nodes![Text::new("a"), None::<Text>, Raw::new("<hr>")];
/// assert_eq!(children.len(), 3);
/// ```
#[macro_export]
macro_rules! nodes {
    () => {
        ::std::vec::Vec::<$crate::BoxedNode>::new()
    };
    ($($node:expr),+ $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($node) as $crate::BoxedNode),+]
    };
}

/// An ordered sequence of nodes rendered back to back.
#[derive(Clone, Default)]
pub struct Components {
    nodes: Vec<BoxedNode>,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: impl Node + 'static) {
        self.nodes.push(Box::new(node));
    }

    pub fn with(mut self, node: impl Node + 'static) -> Self {
        self.push(node);
        self
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoxedNode> {
        self.nodes.iter()
    }
}

impl From<Vec<BoxedNode>> for Components {
    fn from(nodes: Vec<BoxedNode>) -> Self {
        Self { nodes }
    }
}

impl FromIterator<BoxedNode> for Components {
    fn from_iter<I: IntoIterator<Item = BoxedNode>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<BoxedNode> for Components {
    fn extend<I: IntoIterator<Item = BoxedNode>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

impl IntoIterator for Components {
    type Item = BoxedNode;
    type IntoIter = std::vec::IntoIter<BoxedNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl Node for Components {
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        for node in &self.nodes {
            node.render_into(ctx, out)?;
        }
        Ok(())
    }
}

/// Shorthand for `Components::from(nodes)`.
pub fn components(nodes: impl IntoIterator<Item = BoxedNode>) -> Components {
    nodes.into_iter().collect()
}

/// A component produced by a closure at render time.
///
/// The closure receives the render context, which makes it the natural place
/// for markup that depends on request-scoped values.
#[derive(Clone)]
pub struct ComponentFn<F> {
    f: F,
}

impl<F, N> ComponentFn<F>
where
    F: Fn(&Context) -> Result<N, RenderError> + Clone + Send + Sync + 'static,
    N: Node,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F, N> Node for ComponentFn<F>
where
    F: Fn(&Context) -> Result<N, RenderError> + Clone + Send + Sync + 'static,
    N: Node,
{
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        (self.f)(ctx)?.render_into(ctx, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Failing;

    impl Node for Failing {
        fn render_into(&self, _ctx: &Context, _out: &mut Vec<u8>) -> Result<(), RenderError> {
            Err(RenderError::msg("boom"))
        }
    }

    fn render(node: &dyn Node) -> Result<String, RenderError> {
        Ok(String::from_utf8(node.render(&Context::new())?)?)
    }

    #[test]
    fn test_raw_is_verbatim() {
        assert_eq!(render(&Raw::new("<svg>x</svg>\n")).unwrap(), "<svg>x</svg>\n");
        assert_eq!(Raw::from_bytes(vec![b'<', b'b']).as_bytes(), b"<b");
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render(&Text::new("123<h1>")).unwrap(), "123&lt;h1&gt;");
        assert_eq!(render(&textf!("{} & {}", "a", "b")).unwrap(), "a &amp; b");
    }

    #[test]
    fn test_components_skip_absent_entries() {
        let with_gaps = Components::from(nodes![
            None::<Text>,
            Text::new("x"),
            None::<Text>,
            Text::new("y"),
        ]);
        let dense = Components::from(nodes![Text::new("x"), Text::new("y")]);

        assert_eq!(render(&with_gaps).unwrap(), render(&dense).unwrap());
        assert_eq!(render(&with_gaps).unwrap(), "xy");
    }

    #[test]
    fn test_components_stop_at_first_error() {
        let comps = Components::new()
            .with(Text::new("a"))
            .with(Failing)
            .with(Text::new("never"));
        let err = render(&comps).unwrap_err();
        assert!(matches!(err, RenderError::Message(ref m) if m == "boom"));
    }

    #[test]
    fn test_component_fn_sees_context() {
        #[derive(Clone)]
        struct Locale(&'static str);

        let greeting = ComponentFn::new(|ctx: &Context| {
            let locale = ctx.get::<Locale>().map(|l| l.0).unwrap_or("en");
            Ok(textf!("locale={}", locale))
        });

        let ctx = Context::new().with_value(Locale("nb"));
        assert_eq!(greeting.render(&ctx).unwrap(), b"locale=nb");
        assert_eq!(render(&greeting).unwrap(), "locale=en");
    }

    #[test]
    fn test_boxed_nodes_clone() {
        let node: BoxedNode = Box::new(Text::new("copy"));
        let copy = node.clone();
        assert_eq!(render(&copy).unwrap(), "copy");
    }
}
