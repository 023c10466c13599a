//! `sitenav export`: engine-facing JSON.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use sitenav::NavModel;
use sitenav::log;

use super::ExportArgs;

pub fn export_plain(model: &NavModel, args: &ExportArgs) -> Result<()> {
    let formatted = render(model, args.pretty)?;

    // Output to file or stdout
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("export"; "wrote navigation to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

fn render(model: &NavModel, pretty: bool) -> Result<String> {
    let plain = model.to_plain_structure();
    let formatted = if pretty {
        serde_json::to_string_pretty(&plain)?
    } else {
        serde_json::to_string(&plain)?
    };
    Ok(formatted)
}
