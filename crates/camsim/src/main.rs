use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = camsim::Args::parse();
    if args.list_presets {
        print!("{}", camsim::preset_table());
        return ExitCode::SUCCESS;
    }

    match camsim::run(args.mount_config(), args.viewer_options()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
