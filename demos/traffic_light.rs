//! Traffic light controller demo.
//!
//! Drives one full cycle of the shipped controller from the console:
//! three timer expiries take the signal Red -> Green -> Yellow -> Red.
//!
//! Run with: cargo run --example traffic_light

use crosslight::traffic::{TrafficController, TrafficEvent};

fn main() {
    env_logger::init();

    println!("=== Traffic Light ===\n");

    // Prints "Entering Red": the initial entry notice fires at startup.
    let mut controller = TrafficController::new();

    for _ in 0..3 {
        println!("\nEvent: timer expired");
        controller
            .handle(TrafficEvent::TimerExpired)
            .expect("cyclic table handles every timer expiry");
    }

    println!("\nBack to {} after one full cycle", controller.current_signal());
}
