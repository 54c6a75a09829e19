//! Line rendering: colors, caller locations, templates, and the assembly of a full line.

mod caller;
mod color;
mod format;
mod line;

pub use caller::{CallerInfo, UNKNOWN_FILE};
pub use color::{
    Color, Sgr, Style, colored_level, colorize, level_style, strip, strip_ansi, wrap,
};
pub use format::{FormatSegment, FormatTemplate, FormatValues, Placeholder};
pub use line::{DEFAULT_PREFIX, LineFormat, RUBY_DATE, default_prefix, validate_date_format};
