//! Plays two randomly laid out fleets against each other over an in-memory
//! transport and prints a JSON summary.

use clap::Parser;
use gridfleet::{
    init_logging, CellState, Coord, FleetComposition, GameConfig, InMemoryTransport, Message,
    Player, Transport, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about = "Simulate a game between two random fleets", long_about = None)]
struct Cli {
    /// Seed for player 1's layout and targeting.
    seed1: u64,
    /// Seed for player 2's layout and targeting.
    seed2: u64,
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,
}

struct Side {
    player: Player,
    rng: SmallRng,
    transport: InMemoryTransport,
    shots: usize,
}

impl Side {
    fn new(
        name: &str,
        seed: u64,
        config: &GameConfig,
        transport: InMemoryTransport,
    ) -> anyhow::Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut player = Player::new(name, config)?;
        player.randomize(&config.fleet, &mut rng)?;
        Ok(Self {
            player,
            rng,
            transport,
            shots: 0,
        })
    }

    /// A random cell not yet struck and not ruled out.
    fn pick_target(&mut self) -> Option<Coord> {
        let open: Vec<Coord> = self
            .player
            .knowledge_board()
            .grid()
            .iter()
            .filter(|&(_, state)| state == CellState::Empty)
            .map(|(coord, _)| coord)
            .collect();
        if open.is_empty() {
            return None;
        }
        Some(open[self.rng.random_range(0..open.len())])
    }
}

/// Play until someone loses or runs out of targets; returns the winner's index.
async fn play(sides: &mut [Side; 2]) -> anyhow::Result<usize> {
    let mut attacker = 0;
    loop {
        let defender = 1 - attacker;
        let (left, right) = sides.split_at_mut(1);
        let (a, d) = if attacker == 0 {
            (&mut left[0], &mut right[0])
        } else {
            (&mut right[0], &mut left[0])
        };

        let Some(target) = a.pick_target() else {
            info!("{} has no targets left and forfeits", a.player.name());
            a.transport.send(Message::End).await?;
            d.transport.recv().await?;
            return Ok(defender);
        };
        a.transport.send(Message::Strike(target)).await?;

        let strike = d.transport.recv().await?;
        debug!("{} -> {}", a.player.name(), strike.encode());
        let coord = match strike {
            Message::Strike(coord) => coord,
            Message::End => return Ok(defender),
            other => anyhow::bail!("expected a strike, got {:?}", other),
        };
        let response = d.player.respond_to_strike(coord)?;
        d.transport.send(Message::Respond(response)).await?;

        let response = match a.transport.recv().await? {
            Message::Respond(response) => response,
            other => anyhow::bail!("expected a response, got {:?}", other),
        };
        debug!("{} <- {}", a.player.name(), Message::Respond(response).encode());
        a.player.record_response(coord, response)?;
        a.shots += 1;

        if response.is_game_over() {
            return Ok(attacker);
        }
        if response.ends_turn() {
            attacker = defender;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = GameConfig::new(cli.width, cli.height, FleetComposition::default());

    let (t1, t2) = InMemoryTransport::pair();
    let mut sides = [
        Side::new("player1", cli.seed1, &config, t1)?,
        Side::new("player2", cli.seed2, &config, t2)?,
    ];

    let winner = play(&mut sides).await?;
    info!("{} wins", sides[winner].player.name());

    let summary = |side: &Side| {
        let remaining = side.player.opponent_remaining().ship_count();
        json!({
            "shots": side.shots,
            "sunk": config.fleet.ship_count() - remaining,
            "lost": side.player.has_lost(),
        })
    };
    let result = json!({
        "player1": summary(&sides[0]),
        "player2": summary(&sides[1]),
        "winner": sides[winner].player.name(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
