//! Listing of built-in language resources

use std::io::Write;

use anyhow::Result;
use sentsplit_core::available_languages;

/// Write one `code<TAB>name` line per built-in language
pub fn list_languages<W: Write>(mut writer: W) -> Result<()> {
    for (code, name) in available_languages() {
        writeln!(writer, "{code}\t{name}")?;
    }
    writer.flush()?;
    Ok(())
}
