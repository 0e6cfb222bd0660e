//! Type-safe, composable server-side HTML rendering.
//!
//! Build documents by composing typed values instead of concatenating
//! strings. Text is always escaped, attribute values are always quoted and
//! escaped, and the output layout is byte-stable across renders.
//!
//! # Creating Reusable Components
//!
//! Any type implementing [`Node`] can be used as a child of an element. A
//! component is usually a small struct whose `render_into` builds elements
//! from its fields:
//!
//! ```
//! use tagsmith::prelude::*;
//!
//! #[derive(Clone)]
//! struct TitledSection {
//!     title: String,
//!     body: BoxedNode,
//! }
//!
//! impl Node for TitledSection {
//!     fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
//!         section(nodes![h2(self.title.as_str()).class("title"), self.body.clone()])
//!             .class("section")
//!             .render_into(ctx, out)
//!     }
//! }
//!
//! let page = TitledSection {
//!     title: "My Title".into(),
//!     body: Box::new(p(nodes![Text::new("Content...")])),
//! };
//! let html = render_to_string(&page, &Context::new()).unwrap();
//! assert_eq!(
//!     html,
//!     "\n<section class='section'>\n<h2 class='title'>My Title</h2>\n\n<p>Content...</p>\n</section>\n"
//! );
//! ```
//!
//! For simple cases a widget function returning a pre-configured [`Element`]
//! is enough, and [`ComponentFn`] covers markup that depends on values stored
//! in the render [`Context`].

pub use serde_json;
pub use tagsmith_core::*;

#[cfg(feature = "elements")]
pub use tagsmith_elements as elements;

/// Everything needed to build and render documents.
///
/// Import with `use tagsmith::prelude::*;` for convenience.
pub mod prelude {
    pub use tagsmith_core::{
        AttrValue, BoxedNode, ComponentFn, Components, Context, Element, EndTag, If, IfFn, Node,
        Raw, RenderError, RenderOptions, Renderer, Text, attrs, components, nodes,
        render_to_bytes, render_to_string, tag, textf, write_to,
    };

    #[cfg(feature = "elements")]
    pub use tagsmith_elements::*;
}
