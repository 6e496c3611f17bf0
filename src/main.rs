//! Multipong headless host
//!
//! Stands in for the transport and scheduler: seats a few scripted players,
//! drives `tick` in a fixed loop and prints the final snapshot as JSON.
//!
//! Usage: `multipong [config.json] [ticks]`

use std::process::ExitCode;

use multipong::sim::{Game, MoveInput, PlayerId, Side};
use multipong::Config;

const DEFAULT_TICKS: u64 = 60 * 60;
const BOT_NAMES: [&str; 3] = ["ada", "bob", "cy"];

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => Config::from_json(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    let ticks = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_TICKS,
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let mut game = Game::new(config, seed)?;
    log::info!("{} starting with seed {}", game.title(), seed);

    let mut bots = Vec::new();
    for name in BOT_NAMES {
        bots.push(game.join(name)?.id);
    }

    for _ in 0..ticks {
        for &id in &bots {
            let input = track_ball(&game, id);
            game.move_player(id, input)?;
        }
        game.tick();
    }

    let score = game.score();
    log::info!(
        "Finished after {} ticks: {} - {}",
        game.time_ticks(),
        score.left,
        score.right
    );
    println!("{}", game.snapshot().to_json()?);
    Ok(())
}

/// Nudge a paddle toward the ball when it approaches that paddle's side
fn track_ball(game: &Game, id: PlayerId) -> MoveInput {
    let Some(player) = game.player(id) else {
        return MoveInput::STILL;
    };
    let ball = game.ball();
    let incoming = match player.side {
        Side::Left => ball.heading_left(),
        Side::Right => ball.heading_right(),
    };
    if !incoming {
        return MoveInput::STILL;
    }
    let centre = player.y + game.config().paddle_width / 2.0;
    let slack = game.config().move_distance / 2.0;
    if ball.pos.y < centre - slack {
        MoveInput::UP
    } else if ball.pos.y > centre + slack {
        MoveInput::DOWN
    } else {
        MoveInput::STILL
    }
}
