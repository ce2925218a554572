use crate::cli::EnvArgs;
use crate::paths::Paths;

pub fn execute(args: EnvArgs, paths: &Paths) -> anyhow::Result<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(paths)?);
        return Ok(());
    }

    println!("APP_DIR={}", paths.app_dir.display());
    println!("DATA_DIR={}", paths.data_dir.display());
    println!("UPDATE_STAGE_DIR={}", paths.update_stage_dir.display());
    println!("LOG_FILE={}", paths.log_file.display());
    Ok(())
}
