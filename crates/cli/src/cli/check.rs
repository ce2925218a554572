use std::fs::File;

use anyhow::Context;

use crate::cli::CheckArgs;

pub fn execute(args: CheckArgs) -> anyhow::Result<()> {
    let file = File::open(&args.path)
        .with_context(|| format!("failed to open {}", args.path.display()))?;

    let commands = modelfile_parser::parse(file)
        .with_context(|| format!("{} is not a valid Modelfile", args.path.display()))?;

    println!(
        "{}: OK ({} instruction(s))",
        args.path.display(),
        commands.len()
    );
    Ok(())
}
