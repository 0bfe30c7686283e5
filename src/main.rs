use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{default_log_path, init_logging};
use hangman::render::summary_line;
use hangman::tui::TuiInterface;
use hangman::{GameError, GameInterface, SessionSummary, game_loop};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    match cli.log_file.clone().or_else(default_log_path) {
        Some(path) => {
            if let Err(e) = init_logging(&path) {
                eprintln!("Logging disabled: cannot open '{}': {e}", path.display());
            }
        }
        None => eprintln!("Logging disabled: no cache directory found."),
    }
    log::info!("Starting hangman (tui: {}, plain: {})", cli.tui, cli.plain);

    let result = if cli.tui {
        let result = match TuiInterface::new() {
            Ok(mut interface) => run(&mut interface),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        // The alternate screen is gone by now; keep the summary on the normal one.
        if let Ok(summary) = &result {
            println!("{}", summary_line(summary));
        }
        result
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock(), io::stdout()).with_styling(!cli.plain);
        run(&mut interface)
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Session aborted: {e}");
            eprintln!("Cannot start the game: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(interface: &mut dyn GameInterface) -> Result<SessionSummary, GameError> {
    game_loop(interface)
}
