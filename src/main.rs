use seqcalc::session::Session;
use seqcalc::tokens;

use error_chain::ChainedError;
use rustyline::error::ReadlineError;
use rustyline::Editor;

fn run_line(session: &mut Session, line: &str) {
    let keys = match tokens::parse(line, session.format().separator()) {
        Ok(keys) => keys,
        Err(e) => {
            println!("{}", e.display_chain());
            return;
        }
    };
    for key in keys.iter() {
        if let Err(e) = session.press(key) {
            println!("{}", e.display_chain());
        }
    }
}

fn main() {
    env_logger::init();

    let mut session = Session::new();
    let mut rl = Editor::<()>::new();
    println!("Keys: digits, '{}', + - x /, = to evaluate, C to clear", session.format().separator());
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                run_line(&mut session, &line);
                println!("{}", session.display());
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                println!("Error reading input: {}", e);
                break;
            }
        }
    }
}
