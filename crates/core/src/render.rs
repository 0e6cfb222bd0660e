//! Top-level entry points: render a root node once and hand the bytes on.

use crate::context::Context;
use crate::error::RenderError;
use crate::node::Node;
use log::debug;
use std::io::Write;

/// Options for the top-level render calls.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Initial capacity of the output buffer.
    pub capacity_hint: usize,
    /// Whether to flush the sink after writing.
    pub flush: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            capacity_hint: 1024,
            flush: true,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capacity_hint(mut self, bytes: usize) -> Self {
        self.capacity_hint = bytes;
        self
    }

    pub fn flush(mut self, flush: bool) -> Self {
        self.flush = flush;
        self
    }
}

/// Renders node trees with a fixed set of [`RenderOptions`].
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render_to_bytes<N>(&self, root: &N, ctx: &Context) -> Result<Vec<u8>, RenderError>
    where
        N: Node + ?Sized,
    {
        let mut out = Vec::with_capacity(self.options.capacity_hint);
        root.render_into(ctx, &mut out)?;
        debug!("Rendered {} bytes", out.len());
        Ok(out)
    }

    /// Renders `root` and writes the result to `sink`.
    ///
    /// Nothing is written when the root renders to no bytes, e.g. an absent
    /// (`None`) root. The render completes in memory before the first write.
    pub fn write_to<W, N>(&self, sink: &mut W, root: &N, ctx: &Context) -> Result<(), RenderError>
    where
        W: Write + ?Sized,
        N: Node + ?Sized,
    {
        let bytes = self.render_to_bytes(root, ctx)?;
        if bytes.is_empty() {
            return Ok(());
        }
        sink.write_all(&bytes)?;
        if self.options.flush {
            sink.flush()?;
        }
        debug!("Wrote {} bytes to sink", bytes.len());
        Ok(())
    }

    /// Renders `root` into a `String`.
    ///
    /// A failed render is returned as an error, never as a partial string.
    pub fn render_to_string<N>(&self, root: &N, ctx: &Context) -> Result<String, RenderError>
    where
        N: Node + ?Sized,
    {
        Ok(String::from_utf8(self.render_to_bytes(root, ctx)?)?)
    }
}

/// Renders `root` and writes it to `sink` with default options.
pub fn write_to<W, N>(sink: &mut W, root: &N, ctx: &Context) -> Result<(), RenderError>
where
    W: Write + ?Sized,
    N: Node + ?Sized,
{
    Renderer::default().write_to(sink, root, ctx)
}

/// Renders `root` into a `String` with default options.
pub fn render_to_string<N>(root: &N, ctx: &Context) -> Result<String, RenderError>
where
    N: Node + ?Sized,
{
    Renderer::default().render_to_string(root, ctx)
}

/// Renders `root` into a byte buffer with default options.
pub fn render_to_bytes<N>(root: &N, ctx: &Context) -> Result<Vec<u8>, RenderError>
where
    N: Node + ?Sized,
{
    Renderer::default().render_to_bytes(root, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::node::{Raw, Text};
    use std::io;

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_to_sink() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut sink = Vec::new();
        let root = Element::new("div").child(Text::new("123<h1>"));
        write_to(&mut sink, &root, &Context::new()).unwrap();
        assert_eq!(sink, b"\n<div>123&lt;h1&gt;</div>\n");
    }

    #[test]
    fn test_absent_root_writes_nothing() {
        let mut sink = ClosedSink;
        write_to(&mut sink, &None::<Element>, &Context::new()).unwrap();
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut sink = ClosedSink;
        let err = write_to(&mut sink, &Text::new("x"), &Context::new()).unwrap_err();
        assert!(matches!(err, RenderError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn test_render_to_string_rejects_invalid_utf8() {
        let err = render_to_string(&Raw::from_bytes(vec![0xff, 0xfe]), &Context::new()).unwrap_err();
        assert!(matches!(err, RenderError::Utf8(_)));
    }

    #[test]
    fn test_renderer_options() {
        let renderer = Renderer::new(RenderOptions::new().capacity_hint(16).flush(false));
        assert_eq!(renderer.options().capacity_hint, 16);
        let html = renderer
            .render_to_string(&Element::new("p").text("hi"), &Context::new())
            .unwrap();
        assert_eq!(html, "\n<p>hi</p>\n");
    }
}
