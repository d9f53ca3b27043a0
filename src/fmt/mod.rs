//! Record rendering: severity classification, layout selection, line
//! assembly, and traceback handling each live in their own module.

mod classify;
mod formatter;
mod template;
mod traceback;

pub use classify::{classify, secondary};
pub use formatter::{Formatter, FormatterConfig};
pub use template::{DEFAULT_WIDTH, SelectionContext, Template, WIDE_BREAKPOINT, detect_width, select};
pub use traceback::{TracebackRenderer, render_plain};
