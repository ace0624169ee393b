use anyhow::Result;

use std::io::{stdin, stdout, Write};

use tictactoe_ai::game::{Game, Player};
use tictactoe_ai::heuristic::Heuristic;
use tictactoe_ai::minimax::Minimax;
use tictactoe_ai::strategy::Strategy;
use tictactoe_ai::tuned::TunedHeuristic;

mod ui;

const MODES: [&str; 3] = ["Human vs Human", "Human vs Computer", "Computer vs Computer"];
const STRATEGIES: [&str; 3] = ["Heuristic", "Tuned", "Minimax"];

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Tic Tac Toe\n");
    println!("Arrow keys or hjkl move, enter confirms. Press q or ctrl + c to quit.\n");

    loop {
        let (game, computers_only) = match ui::menu("Select game mode:", &MODES)? {
            Some(0) => (Some(human_vs_human()), false),
            Some(1) => (human_vs_computer()?, false),
            Some(_) => (computer_vs_computer()?, true),
            None => break,
        };

        let game = match game {
            Some(game) => game,
            // quit from one of the setup menus
            None => break,
        };
        run_game(game, computers_only)?;

        let mut play_again = false;
        loop {
            let mut buffer = String::new();
            print!("Play again? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");
            stdin.read_line(&mut buffer)?;
            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    play_again = true;
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }
        if !play_again {
            break;
        }
        println!();
    }
    Ok(())
}

fn pick_strategy(title: &str) -> Result<Option<Box<dyn Strategy>>> {
    let strategy = ui::menu(title, &STRATEGIES)?.map(|index| -> Box<dyn Strategy> {
        match index {
            0 => Box::new(Heuristic),
            1 => Box::new(TunedHeuristic::new()),
            _ => Box::new(Minimax),
        }
    });
    Ok(strategy)
}

fn human_vs_human() -> Game {
    Game::new(
        Player::human("Player 1").expect("fixed player names are valid"),
        Player::human("Player 2").expect("fixed player names are valid"),
    )
}

fn human_vs_computer() -> Result<Option<Game>> {
    let strategy = match pick_strategy("Choose computer strategy:")? {
        Some(strategy) => strategy,
        None => return Ok(None),
    };
    let computer = Player::computer(strategy);
    let human = Player::human("Player").expect("fixed player names are valid");

    let computer_name = computer.name();
    let human_name = human.name();
    let game = ui::menu(
        "Choose first player:",
        &[computer_name.as_str(), human_name.as_str()],
    )?
    .map(|index| {
        if index == 0 {
            Game::new(computer, human)
        } else {
            Game::new(human, computer)
        }
    });
    Ok(game)
}

fn computer_vs_computer() -> Result<Option<Game>> {
    let first = match pick_strategy("Choose strategy for first computer:")? {
        Some(strategy) => strategy,
        None => return Ok(None),
    };
    let second = match pick_strategy("Choose strategy for second computer:")? {
        Some(strategy) => strategy,
        None => return Ok(None),
    };
    Ok(Some(Game::new(
        Player::computer(first),
        Player::computer(second),
    )))
}

fn run_game(mut game: Game, computers_only: bool) -> Result<()> {
    while !game.is_over() {
        let current_name = game.current_player().name();
        match game.current_player().strategy() {
            // human turn: interactive selection, retried until a legal cell
            None => {
                let mut status = format!("Current player: {}", current_name);
                loop {
                    let cell = match ui::pick_cell(&game.board(), &status)? {
                        Some(cell) => cell,
                        None => {
                            println!("Game abandoned.");
                            return Ok(());
                        }
                    };
                    match game.play(cell) {
                        Ok(()) => break,
                        Err(err) => status = format!("Error: {}", err),
                    }
                }
            }
            Some(strategy) => {
                let cell = strategy.choose_move(&game.board());
                game.play(cell)
                    .expect("computer strategies only pick open cells");
                println!("{} plays:", current_name);
                ui::print_board(&game.board())?;
                // slow down play when both players are computers
                if computers_only {
                    std::thread::sleep(std::time::Duration::from_millis(500));
                }
            }
        }
    }

    println!("Final board:");
    ui::print_board(&game.board())?;
    match game.winner() {
        Some(winner) => println!("Game is over, winner is: {}", winner.name()),
        None => println!("Game is over, Draw"),
    }
    println!();
    Ok(())
}
