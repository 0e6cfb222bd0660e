//! Core abstractions for rendering typed node trees to HTML.
//!
//! This crate provides the serialization engine of tagsmith: the [`Node`]
//! trait every renderable value implements, the [`Element`] builder, the
//! escaping rules, and the composite and conditional combinators.
//!
//! ## Key Abstractions
//!
//! - **`Node`**: anything that can render itself to bytes given a [`Context`]
//! - **`Element`**: a tag with attributes, classes, inline styles and children
//! - **`Text`** / **`Raw`**: escaped and verbatim leaves
//! - **`Components`**: an ordered sequence of nodes
//! - **`If`** / **`IfFn`**: first-match-wins conditional selection
//! - **`write_to`** / **`render_to_string`**: top-level entry points
//!
//! ```
//! use tagsmith_core::{render_to_string, tag, Context, Text};
//!
//! let page = tag("div").child(tag("div").child(Text::new("Hello")));
//! let html = render_to_string(&page, &Context::new()).unwrap();
//! assert_eq!(html, "\n<div>\n<div>Hello</div>\n</div>\n");
//! ```

pub mod attribute;
pub mod context;
pub mod control;
pub mod element;
pub mod error;
pub mod escape;
pub mod node;
pub mod render;

pub use attribute::{AttrValue, Attribute, Attributes, Structured};
pub use context::Context;
pub use control::{If, IfFn};
pub use element::{EndTag, Element, tag};
pub use error::RenderError;
pub use escape::{encode_structured, escape_attribute_value, escape_text};
pub use node::{BoxedNode, CloneNode, ComponentFn, Components, Node, Raw, Text, components};
pub use render::{RenderOptions, Renderer, render_to_bytes, render_to_string, write_to};
