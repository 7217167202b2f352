use sfxprep_lib::cli::{ResolvedCommand, parse_args, resolve_command, run_fetch, run_list};
use sfxprep_lib::error::SfxPrepError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), SfxPrepError> {
    color_eyre::install()?;

    let args = parse_args();
    let command = resolve_command(args.command)?;

    match command {
        ResolvedCommand::Fetch(params) => {
            // Failed assets were already reported; the run itself succeeded.
            run_fetch(params).await?;
        }
        ResolvedCommand::List(params) => run_list(params)?,
    }

    Ok(())
}
