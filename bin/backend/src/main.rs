pub mod api;
pub mod cli;
pub mod http;
pub mod model;
pub mod opts;

use anyhow::Result;
use atb::logging::init_tracer;
use atb_cli_utils::AtbCli;
use breakit_core::{GenerationRequest, prompt};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    Cli::set_globals(&cli.base);

    match cli.subcommand {
        Commands::Prompt { prompt: opts } => {
            let req = GenerationRequest::parse(
                &opts.problem,
                opts.frameworks.as_slice(),
                opts.tone.as_deref(),
                opts.length.as_deref(),
            )?;
            println!("{}", prompt::compose(&req));
            Ok(())
        }
        Commands::Serve {
            http,
            completion,
            render,
        } => {
            let _guard = init_tracer(Default::default()).expect("tracer setup succeeds. qed");
            let runtime = Cli::create_runtime(cli.worker_threads)?;
            runtime.block_on(async move { http::run(http, completion, render).await })
        }
    }
}
