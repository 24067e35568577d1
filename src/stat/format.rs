use super::DiffStat;
use anstyle::{AnsiColor, Style};
use std::fmt::{Display, Formatter, Result};

/// Struct used to adjust the formatting of a `DiffStat`
#[derive(Debug)]
pub struct StatFormatter {
    with_color: bool,

    insert: Style,
    delete: Style,
}

impl StatFormatter {
    /// Construct a new formatter
    pub fn new() -> Self {
        Self {
            with_color: false,

            insert: AnsiColor::Green.on_default(),
            delete: AnsiColor::Red.on_default(),
        }
    }

    /// Enable formatting a stat with color
    pub fn with_color(mut self) -> Self {
        self.with_color = true;
        self
    }

    /// Returns a `Display` impl which can be used to print a DiffStat
    pub fn fmt_stat<'a>(&'a self, stat: &'a DiffStat) -> impl Display + 'a {
        StatDisplay { f: self, stat }
    }
}

impl Default for StatFormatter {
    fn default() -> Self {
        Self::new()
    }
}

struct StatDisplay<'a> {
    f: &'a StatFormatter,
    stat: &'a DiffStat,
}

impl Display for StatDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.f.with_color {
            write!(
                f,
                "{}+{}{}",
                self.f.insert.render(),
                self.stat.added(),
                self.f.insert.render_reset()
            )?;
            write!(f, " ")?;
            write!(
                f,
                "{}-{}{}",
                self.f.delete.render(),
                self.stat.removed(),
                self.f.delete.render_reset()
            )?;
        } else {
            write!(f, "+{} -{}", self.stat.added(), self.stat.removed())?;
        }

        Ok(())
    }
}
