use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::process;
use textquest::core::game_loop::{run_game, start_game, GameExit};
use textquest::errors::GameError;
use textquest::input::PromptReader;
use textquest::save_manager::SaveManager;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(GameExit::Defeated(_)) => process::exit(0),
        Ok(_) => {}
        Err(e) => {
            log::error!("fatal: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> Result<GameExit, GameError> {
    let save_manager = SaveManager::new()?;

    let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    log::debug!("rng seed {}", seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut input = PromptReader::new(stdin.lock());
    let mut out = io::stdout();

    let mut state = start_game(&save_manager, &mut out)?;
    run_game(&mut state, &save_manager, &mut input, &mut out, &mut rng)
}
