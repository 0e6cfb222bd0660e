use crate::context::Context;
use crate::error::RenderError;
use crate::node::{BoxedNode, Components, Node};
use log::trace;
use std::sync::Arc;

/// Builder for an `if / else if / else` chain over already-built nodes.
///
/// The first branch whose condition holds is kept; later branches are
/// ignored. If nothing matches and there is no `otherwise`, it renders
/// nothing.
#[derive(Clone, Default)]
pub struct If {
    resolved: bool,
    nodes: Components,
}

impl If {
    /// Creates a new `If` builder.
    ///
    /// # Arguments
    ///
    /// * `cond` - Whether this branch is taken.
    /// * `nodes` - The nodes to render when it is.
    pub fn new(cond: bool, nodes: impl IntoIterator<Item = BoxedNode>) -> Self {
        Self::default().else_if(cond, nodes)
    }

    pub fn else_if(mut self, cond: bool, nodes: impl IntoIterator<Item = BoxedNode>) -> Self {
        if !self.resolved && cond {
            self.resolved = true;
            self.nodes = nodes.into_iter().collect();
        }
        self
    }

    /// Sets the nodes to render when no earlier condition held.
    pub fn otherwise(self, nodes: impl IntoIterator<Item = BoxedNode>) -> Self {
        self.else_if(true, nodes)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

impl Node for If {
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        if !self.resolved {
            trace!("If chain unresolved; rendering nothing");
            return Ok(());
        }
        self.nodes.render_into(ctx, out)
    }
}

type Build = Arc<dyn Fn() -> BoxedNode + Send + Sync>;

/// Like [`If`], but each branch is a constructor that only runs if its
/// branch is chosen, at render time.
///
/// Use it when building the losing branches would be expensive or have
/// side effects.
#[derive(Clone, Default)]
pub struct IfFn {
    chosen: Option<Build>,
}

impl IfFn {
    pub fn new<F, N>(cond: bool, build: F) -> Self
    where
        F: Fn() -> N + Send + Sync + 'static,
        N: Node + 'static,
    {
        Self::default().else_if(cond, build)
    }

    pub fn else_if<F, N>(mut self, cond: bool, build: F) -> Self
    where
        F: Fn() -> N + Send + Sync + 'static,
        N: Node + 'static,
    {
        if self.chosen.is_none() && cond {
            self.chosen = Some(Arc::new(move || Box::new(build()) as BoxedNode));
        }
        self
    }

    pub fn otherwise<F, N>(self, build: F) -> Self
    where
        F: Fn() -> N + Send + Sync + 'static,
        N: Node + 'static,
    {
        self.else_if(true, build)
    }

    pub fn is_resolved(&self) -> bool {
        self.chosen.is_some()
    }
}

impl Node for IfFn {
    fn render_into(&self, ctx: &Context, out: &mut Vec<u8>) -> Result<(), RenderError> {
        match &self.chosen {
            Some(build) => build().render_into(ctx, out),
            None => Ok(()),
        }
    }
}
