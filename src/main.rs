//! nongkrong main entrypoint.

use nongkrong::run;
use nongkrong::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
