//! apex's main application entry point and orchestration logic.
//! Handles command-line argument parsing, configuration collection,
//! project generation and the post-generation hook.

use apex::{
    cli::{get_args, Args, Commands, NewArgs},
    config::{load_answers_file, load_answers_from, Answers},
    error::{default_error_handler, Result},
    hooks::GoModBootstrap,
    logger::init_logger,
    processor::generate_project,
    prompt::{ask_project_config, DefaultsPrompter, DialoguerPrompter, Prompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::New(new_args) => run_new(new_args),
    }
}

/// Flow of `apex new`:
/// 1. Merges answers from flags with an answers file or stdin
/// 2. Prompts for whatever is still missing
/// 3. Renders the selected template roots into `<output_dir>/<name>`
/// 4. Bootstraps Go module metadata (best effort)
fn run_new(args: NewArgs) -> Result<()> {
    let preloaded = if let Some(path) = &args.answers {
        load_answers_file(path)?
    } else if args.stdin {
        load_answers_from(std::io::stdin().lock())?
    } else {
        Answers::default()
    };
    let answers = args.flag_answers().or(preloaded);

    // stdin is consumed by --stdin, so it cannot drive prompts afterwards.
    let prompter: Box<dyn Prompter> = if args.yes || args.stdin {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(DialoguerPrompter::new())
    };
    let config = ask_project_config(&*prompter, answers)?;

    let output_root = match args.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let engine = MiniJinjaRenderer::new();
    let dest = generate_project(&engine, &config, &output_root, args.force)?;

    if !args.skip_hooks {
        GoModBootstrap::default().run(&dest, &config.module);
    }

    println!("Project created at {}", dest.display());
    Ok(())
}
