use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::process::ExitCode;
use word_jumble::cli::{CliInterface, parse_cli};
use word_jumble::tui::TuiInterface;
use word_jumble::{
    GameState, JumbleError, game_loop, info_log, load_word_list, logging, resolve_word_list_path,
};

fn main() -> ExitCode {
    logging::init();
    let cli = parse_cli();

    let path = resolve_word_list_path(cli.word_list_path.as_deref());
    let words = match load_word_list(&path) {
        Ok(words) if words.is_empty() => {
            eprintln!("Error: {}", JumbleError::EmptyWordList { path });
            return ExitCode::FAILURE;
        }
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut state = GameState::new(words);

    if cli.tui {
        let mut interface = match TuiInterface::new() {
            Ok(interface) => interface,
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        };
        game_loop(&mut state, &mut interface, &mut rng);
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut state, &mut interface, &mut rng);
    }

    info_log!("Session finished with score {}", state.score);
    ExitCode::SUCCESS
}
