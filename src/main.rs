//! pomomemo main entrypoint.

use pomomemo::run;
use pomomemo::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
