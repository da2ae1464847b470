//! Get command implementation

use anyhow::Result;

use crate::cli::context::section_label;
use crate::cli::Context;

/// Execute the get command
pub fn execute(
    ctx: &Context,
    section: Option<&str>,
    key: &str,
    default: Option<&str>,
) -> Result<()> {
    let (file, _) = ctx.open()?;
    let doc = file.document();

    match (doc.contains_key(section, key), default) {
        (true, _) => println!("{}", doc.get_string(section, key, "")),
        (false, Some(default)) => println!("{}", default),
        (false, None) => {
            anyhow::bail!("Key '{}' not found in {}", key, section_label(section))
        }
    }

    Ok(())
}
