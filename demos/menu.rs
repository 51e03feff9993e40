use std::io::{self, BufRead, Write};

use log::LevelFilter;
use tetra_supply::{Command, Effect, Snapshot, SupplyConfig, SupplyController, SupplyMode};

/// Terminal menu driver mirroring the original simulator: render the
/// containers, read a numeric choice, dispatch it, echo what happened.
///
/// Usage: cargo run --example menu [manual]
fn main() {
    init_logger();

    let mode = match std::env::args().nth(1).as_deref() {
        None => SupplyMode::Supply,
        Some("manual") => SupplyMode::Manual,
        Some(other) => {
            eprintln!("Unknown mode \"{other}\". Usage: menu [manual]");
            std::process::exit(1);
        }
    };

    let mut supply = SupplyController::new(SupplyConfig {
        mode,
        ..SupplyConfig::default()
    });
    println!(
        "Initialized the queue with {} pieces ({} mode).",
        supply.queue().len(),
        supply.mode()
    );

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        render(mode, &supply.snapshot());
        print_menu(mode);

        line.clear();
        let read = stdin.lock().read_line(&mut line).expect("read from stdin");
        if read == 0 {
            break; // EOF
        }

        let command = match Command::parse_menu_choice(mode, &line) {
            Ok(command) => command,
            Err(err) => {
                println!("\n{err}. Please try again.");
                continue;
            }
        };

        match supply.dispatch(command) {
            Ok(Effect::Quit) => break,
            Ok(effect) => print_effect(effect),
            Err(err) => println!("\nERROR: {err}."),
        }
    }

    let stats = supply.stats();
    println!(
        "\nSession over: {} generated, {} played, {} reserved, {} used from reserve.",
        stats.generated, stats.played, stats.reserved, stats.used_from_reserve
    );
}

fn render(mode: SupplyMode, snapshot: &Snapshot) {
    print!("\nPiece queue:");
    if snapshot.queue.is_empty() {
        print!(" [empty]");
    }
    for piece in &snapshot.queue {
        print!(" {piece}");
    }
    println!();

    // The manual-mode original has no reserve to show.
    if mode == SupplyMode::Supply {
        print!("Reserve stack (top -> bottom):");
        if snapshot.stack.is_empty() {
            print!(" [empty]");
        }
        for piece in &snapshot.stack {
            print!(" {piece}");
        }
        println!();
    }
}

fn print_menu(mode: SupplyMode) {
    println!("\n--- Actions ---");
    match mode {
        SupplyMode::Supply => {
            println!("1 - Play piece (dequeue + refill)");
            println!("2 - Reserve piece (queue -> stack + refill)");
            println!("3 - Use reserved piece (pop + refill)");
        }
        SupplyMode::Manual => {
            println!("1 - Play piece (dequeue)");
            println!("2 - Insert new piece (enqueue)");
        }
    }
    println!("0 - Quit");
    print!("Choose an option: ");
    io::stdout().flush().expect("flush stdout");
}

fn print_effect(effect: Effect) {
    match effect {
        Effect::Played { piece, refill } => {
            println!("\nPlayed {piece} from the front of the queue.");
            println!("New piece {refill} added at the back to keep the supply full.");
        }
        Effect::Reserved { piece, refill } => {
            println!("\nReserved {piece}, moved from the queue to the stack.");
            println!("New piece {refill} added at the back to keep the supply full.");
        }
        Effect::UsedReserve {
            piece,
            refill,
            displaced,
        } => {
            println!("\nUsed reserved {piece} from the top of the stack.");
            println!("New piece {refill} added at the back of the queue.");
            if let Some(displaced) = displaced {
                println!("The queue was full, so {displaced} slid out at the front.");
            }
        }
        Effect::Enqueued { piece } => {
            println!("\nPiece {piece} inserted at the back of the queue.");
        }
        Effect::Dequeued { piece } => {
            println!("\nPiece {piece} played and removed from the front of the queue.");
        }
        Effect::Quit => {}
    }
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {}
}

/// Transition logs stay off unless TETRA_LOG=debug is set in the
/// environment.
fn init_logger() {
    static LOGGER: StderrLogger = StderrLogger;

    let level = match std::env::var("TETRA_LOG").as_deref() {
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Off,
    };
    log::set_logger(&LOGGER).expect("logger installed once");
    log::set_max_level(level);
}
