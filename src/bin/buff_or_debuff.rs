//! Console front end.
//!
//! ```text
//! buff_or_debuff [--seed N] [--rounds N] [--config path.json] [--autoplay]
//! ```
//!
//! Logs go to stderr (`RUST_LOG`, default `buff_or_debuff=warn`) so they
//! never interleave with the prompts on stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use buff_or_debuff::cards::{Card, Token};
use buff_or_debuff::core::{GameConfig, GameError, PlayerMap};
use buff_or_debuff::game::{GameBuilder, Standing};
use buff_or_debuff::players::{HumanInput, Player};
use buff_or_debuff::round::{RoundObserver, TracingObserver};

#[derive(Debug, Default)]
struct Args {
    seed: Option<u64>,
    rounds: Option<u32>,
    config: Option<PathBuf>,
    autoplay: bool,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().context("--seed needs a value")?;
                    parsed.seed = Some(value.parse().context("--seed must be an integer")?);
                }
                "--rounds" => {
                    let value = args.next().context("--rounds needs a value")?;
                    parsed.rounds = Some(value.parse().context("--rounds must be an integer")?);
                }
                "--config" => {
                    let value = args.next().context("--config needs a path")?;
                    parsed.config = Some(PathBuf::from(value));
                }
                "--autoplay" => parsed.autoplay = true,
                other => bail!(
                    "unknown argument `{other}`\n\
                     usage: buff_or_debuff [--seed N] [--rounds N] [--config path.json] [--autoplay]"
                ),
            }
        }
        Ok(parsed)
    }

    fn load_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                GameConfig::from_json(&json)
                    .with_context(|| format!("invalid config {}", path.display()))?
            }
            None => GameConfig::default(),
        };
        if let Some(rounds) = self.rounds {
            config = config.with_total_rounds(rounds);
            config.validate().context("invalid --rounds")?;
        }
        Ok(config)
    }
}

const CARD_PROMPT: &str = "What card would you like to play? ";

/// Line-based prompting. Lists the hand and keeps asking until it gets a
/// valid index.
struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `prompt` and read one trimmed line; `None` on EOF.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_card(&mut self, visible_hand: &[Card]) -> io::Result<Option<usize>> {
        writeln!(self.writer)?;
        writeln!(self.writer, "Your hand:")?;
        for (i, card) in visible_hand.iter().enumerate() {
            writeln!(self.writer, "{i}) {card}")?;
        }
        loop {
            let Some(line) = self.read_line(CARD_PROMPT)? else {
                return Ok(None);
            };
            match line.parse::<usize>() {
                Ok(index) if index < visible_hand.len() => return Ok(Some(index)),
                _ => writeln!(self.writer, "Invalid card choice...")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> HumanInput for ConsoleInput<R, W> {
    fn request_card_choice(&mut self, visible_hand: &[Card]) -> Option<usize> {
        match self.prompt_card(visible_hand) {
            Ok(choice) => choice,
            Err(err) => {
                warn!(error = %err, "could not read card choice");
                None
            }
        }
    }
}

/// Prints the round to stdout and mirrors it into the log.
#[derive(Default)]
struct ConsoleObserver {
    round: u32,
    log: TracingObserver,
}

impl RoundObserver for ConsoleObserver {
    fn report_round_state(&mut self, players: &PlayerMap<Player>, buff: &Token, debuff: &Token) {
        self.round += 1;
        println!();
        println!("===== Round {} =====", self.round);
        for player in players.values() {
            println!("  {player}");
        }
        println!("Buff: {buff}   Debuff: {debuff}");
        self.log.report_round_state(players, buff, debuff);
    }

    fn report_play(&mut self, player: &Player, card: &Card) {
        println!("{} played {}", player.name(), card);
        self.log.report_play(player, card);
    }

    fn report_round_result(&mut self, winner: &Player, points: i64) {
        println!("{} wins the round and gets {} points!", winner.name(), points);
        self.log.report_round_result(winner, points);
    }
}

fn print_standings(standings: &[Standing]) {
    println!();
    println!("===== Final scores =====");
    for (place, standing) in standings.iter().enumerate() {
        println!("{}. {}: {}", place + 1, standing.name, standing.score);
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "buff_or_debuff=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse(std::env::args().skip(1))?;
    let config = args.load_config()?;
    let mut seed = args.seed.unwrap_or_else(clock_seed);

    println!("==============================");
    println!("        BUFF OR DEBUFF");
    println!("==============================");

    let mut console = ConsoleInput::stdio();
    let name = if args.autoplay {
        "Player".to_string()
    } else {
        match console.read_line("What is your name? ")? {
            Some(name) if !name.is_empty() => name,
            Some(_) => "Player".to_string(),
            None => return Ok(()),
        }
    };

    loop {
        info!(seed, "starting game");
        let mut game = GameBuilder::new()
            .player_name(name.clone())
            .config(config.clone())
            .autoplay(args.autoplay)
            .build(seed)?;

        let mut observer = ConsoleObserver::default();
        match game.play(&mut console, &mut observer) {
            Ok(standings) => print_standings(&standings),
            Err(GameError::InputClosed) => {
                println!();
                println!("Input closed, quitting.");
                return Ok(());
            }
            Err(e) => return Err(e).context("game aborted"),
        }

        match console.read_line("Play again? (y/n) ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => seed = seed.wrapping_add(1),
            _ => break,
        }
    }

    println!("Thanks for playing!");
    Ok(())
}
