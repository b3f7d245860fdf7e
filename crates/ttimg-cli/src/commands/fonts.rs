//! Font listing

use std::io::{self, Write};

use ttimg_fontdb::FontCatalog;

/// Write one catalogued font name per line, sorted.
pub fn list(catalog: &FontCatalog, out: &mut impl Write) -> io::Result<()> {
    if catalog.is_empty() {
        log::warn!("No fonts found in the system font folders");
    }
    for name in catalog.names() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}
