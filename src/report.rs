//! Post-conversion output for the user.

use std::io::{self, Write};
use std::path::Path;

/// Print the success message and the manual print-to-PDF steps.
pub fn print_success(output_path: &Path) -> io::Result<()> {
    let stdout = io::stdout();
    write_success(&mut stdout.lock(), output_path)
}

fn write_success(out: &mut impl Write, output_path: &Path) -> io::Result<()> {
    let output = output_path.display();
    writeln!(out, "✅ Successfully created {}", output)?;
    writeln!(out, "\nTo create PDF:")?;
    writeln!(out, "1. Open {} in your browser", output)?;
    writeln!(out, "2. Press Cmd+P (Mac) or Ctrl+P (Windows)")?;
    writeln!(out, "3. Select 'Save as PDF'")?;
    writeln!(out, "4. Save and share!")?;
    Ok(())
}
