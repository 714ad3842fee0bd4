//! rTrainWatch main entrypoint.

use rtrainwatch::{logging, run};

fn main() {
    logging::init();

    if let Err(e) = run() {
        rtrainwatch::ui::messages::error(format!("Error: {}", e));
        std::process::exit(e.exit_code());
    }
}
