use std::io::Write;

use compact_str::CompactString;

use termcolor::{ColorSpec, Color, WriteColor};

/// Ordered output segments of one log line.
#[derive(Default, Clone)]
pub struct LogFmt {
    segments: Vec<SegmentSpec>,
}

impl LogFmt {

    /// `<label> <target>: <message>` with a bold colored label.
    pub fn leveled(label: &str, color: Color) -> Self {
        let mut fmt = Self::default();
        LogFmtBuilder::new(&mut fmt)
            .text(label, |spec| spec.with_color_spec(|c| {
                c.set_fg(Some(color)).set_bold(true);
            }))
            .text(" ", |spec| spec)
            .target(|spec| spec.with_color_spec(|c| {
                c.set_dimmed(true);
            }))
            .text(": ", |spec| spec)
            .message(|spec| spec);
        fmt
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn write_record<W: WriteColor>(
        &self,
        out: &mut W,
        target: &str,
        msg: core::fmt::Arguments,
    ) -> std::io::Result<()>
    {
        for segment in self {
            match segment {
                SegmentSpec::Message(log_spec) => {
                    log_spec.write_colored(out, |out| write!(out, "{}", msg))?;
                },
                SegmentSpec::Target(log_spec) => {
                    log_spec.write_colored(out, |out| out.write_all(target.as_bytes()))?;
                },
                SegmentSpec::Text(text, log_spec) => {
                    log_spec.write_colored(out, |out| out.write_all(text.as_bytes()))?;
                },
            }
        }
        out.write_all(b"\n")
    }
}

impl<'a> IntoIterator for &'a LogFmt {

    type Item = &'a SegmentSpec;
    type IntoIter = core::slice::Iter<'a, SegmentSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

#[derive(Default, Clone)]
pub struct LogSpec {
    pub color_spec: Option<ColorSpec>,
}

impl LogSpec {

    #[inline(always)]
    pub fn with_color_spec(mut self, mut f: impl FnMut(&mut ColorSpec)) -> Self {
        let color_spec = self.color_spec.insert(ColorSpec::new());
        f(color_spec);
        self
    }

    fn write_colored<W: WriteColor>(
        &self,
        out: &mut W,
        f: impl FnOnce(&mut W) -> std::io::Result<()>,
    ) -> std::io::Result<()>
    {
        if let Some(color_spec) = &self.color_spec {
            out.set_color(color_spec)?;
            f(out)?;
            out.reset()
        } else {
            f(out)
        }
    }
}

#[derive(Clone)]
pub enum SegmentSpec {
    Message(LogSpec),
    Target(LogSpec),
    Text(CompactString, LogSpec),
}

pub struct LogFmtBuilder<'a> {
    fmt: &'a mut LogFmt,
}

impl<'a> LogFmtBuilder<'a> {

    /// Clears `fmt` and starts appending segments to it.
    #[inline(always)]
    pub fn new(fmt: &'a mut LogFmt) -> Self {
        fmt.clear();
        Self {
            fmt,
        }
    }

    #[inline(always)]
    pub fn message(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Message(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn target(&mut self, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Target(f(Default::default())));
        self
    }

    #[inline(always)]
    pub fn text(&mut self, text: &str, mut f: impl FnMut(LogSpec) -> LogSpec) -> &mut Self {
        self.fmt.segments.push(SegmentSpec::Text(CompactString::new(text), f(Default::default())));
        self
    }
}
