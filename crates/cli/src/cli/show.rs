use std::fs::File;

use anyhow::Context;

use crate::cli::ShowArgs;

pub fn execute(args: ShowArgs) -> anyhow::Result<()> {
    let file = File::open(&args.path)
        .with_context(|| format!("failed to open {}", args.path.display()))?;

    let commands = modelfile_parser::parse(file)
        .with_context(|| format!("{} is not a valid Modelfile", args.path.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&commands)?);
        return Ok(());
    }

    let width = commands.iter().map(|c| c.name.len()).max().unwrap_or(0);
    for command in &commands {
        println!("{:<width$}  {}", command.name, command.args);
    }
    Ok(())
}
