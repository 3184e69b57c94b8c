//! Cycle Demo - Headless engine walkthrough
//!
//! Drives a carousel without a terminal UI: prints the page after each
//! operation and lets the cadence run briefly between them.
//!
//! Run with: cargo run --example cycle

use std::thread;
use std::time::Duration;

use carousel::{Carousel, CarouselOptions, Measurements, OffsetModel};

fn main() {
    let deck = Carousel::new(CarouselOptions {
        slot_count: 7,
        interval: Some(Duration::from_millis(400)),
        window: Box::new(|| 4),
        offset: OffsetModel::Window(Box::new(|| {
            Measurements::new(296.0, 16.0, 1280.0, 32.0)
        })),
    });

    println!("7 slots, 4 per view -> {} pages", deck.page_count());
    println!("start:            page {}  offset {:?}", deck.page(), deck.offset());

    thread::sleep(Duration::from_millis(500));
    println!("after the cadence: page {}  offset {:?}", deck.page(), deck.offset());

    deck.pause();
    thread::sleep(Duration::from_millis(500));
    println!("held:             page {} (cadence blocked)", deck.page());

    deck.resume();
    deck.go_to(1);
    println!("jumped:           page {}  offset {:?}", deck.page(), deck.offset());

    deck.stop();
    println!("stopped:          phase {:?}", deck.phase());
}
