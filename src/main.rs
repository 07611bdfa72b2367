//! rWorkday main entrypoint.

use rworkday::errors::AppError;
use rworkday::run;
use rworkday::ui::messages;

fn main() {
    println!();
    match run() {
        Ok(()) => {}
        Err(AppError::Interrupted) => {
            println!();
            messages::warning("Timer stopped by user");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
