//! Showcase Demo - Two carousels on one event loop
//!
//! This example demonstrates everything working together:
//! - A slide show paging one slot at a time on the default cadence
//! - A windowed card deck whose window size follows terminal width
//! - Hover pauses, arrows and the wheel page, digits jump, q quits
//! - Resizing the terminal relayouts after the drag settles
//!
//! Run with: cargo run --example showcase

use std::cell::Cell;
use std::io::{Write, stdout};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::Print,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use carousel::{
    Breakpoints, Carousel, ControlEvent, ControlHandlers, ControlRegions, Measurements, Offset,
    Rect, bind, disable_mouse, enable_mouse, poll_control, poll_layout, route_control,
    set_regions,
};

const HERO_ROW: u16 = 1;
const CARDS_ROW: u16 = 7;
const CARD_WIDTH: u16 = 16;
const CARD_GAP: u16 = 2;
const HERO_SLOTS: usize = 5;
const CARD_SLOTS: usize = 7;

fn main() -> std::io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, Hide)?;
    enable_mouse()?;

    let result = run();

    disable_mouse()?;
    execute!(stdout(), Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run() -> std::io::Result<()> {
    let mut width = terminal::size()?.0;
    let term_width = Rc::new(Cell::new(width));

    // One slot per page, rotating on the default cadence.
    let hero = Rc::new(Carousel::slide_show(HERO_SLOTS));

    // Card deck: 1 column on narrow terminals, 2 on medium, 4 on wide.
    let policy = Breakpoints::new(4).up_to(60, 1).up_to(100, 2);
    let cards = Rc::new(Carousel::windowed(
        CARD_SLOTS,
        {
            let term_width = Rc::clone(&term_width);
            move || policy.window_for(term_width.get())
        },
        {
            let term_width = Rc::clone(&term_width);
            move || {
                Measurements::new(
                    (CARD_WIDTH + CARD_GAP) as f32,
                    CARD_GAP as f32,
                    term_width.get() as f32,
                    2.0,
                )
            }
        },
    ));

    let (hero_id, _unbind_hero) = bind(
        hero_regions(width, hero.page_count()),
        carousel_handlers(&hero, None),
    );
    let (cards_id, _unbind_cards) = bind(
        cards_regions(width, cards.page_count()),
        carousel_handlers(
            &cards,
            Some(Rc::new({
                let cards = Rc::clone(&cards);
                let term_width = Rc::clone(&term_width);
                move |new_width, _| {
                    term_width.set(new_width);
                    cards.recompute_layout();
                }
            })),
        ),
    );

    loop {
        if let Some(event) = poll_control(Duration::from_millis(16))? {
            if event == ControlEvent::Quit {
                break;
            }
            route_control(event);
        }
        // A settled resize already recomputed the deck; refresh hit regions.
        if poll_layout() {
            width = terminal::size()?.0;
            set_regions(hero_id, hero_regions(width, hero.page_count()));
            set_regions(cards_id, cards_regions(width, cards.page_count()));
        }
        draw(&hero, &cards, width)?;
    }

    hero.stop();
    cards.stop();
    Ok(())
}

/// Wire one carousel handle into a full handler set.
fn carousel_handlers(
    carousel: &Rc<Carousel>,
    on_layout: Option<Rc<dyn Fn(u16, u16)>>,
) -> ControlHandlers {
    let next = Rc::clone(carousel);
    let prev = Rc::clone(carousel);
    let select = Rc::clone(carousel);
    let enter = Rc::clone(carousel);
    let leave = Rc::clone(carousel);
    ControlHandlers {
        on_next: Some(Rc::new(move || next.next())),
        on_prev: Some(Rc::new(move || prev.prev())),
        on_select: Some(Rc::new(move |page| select.go_to(page))),
        on_pointer_enter: Some(Rc::new(move || enter.pause())),
        on_pointer_leave: Some(Rc::new(move || leave.resume())),
        on_layout,
    }
}

fn hero_regions(width: u16, pages: usize) -> ControlRegions {
    let dots = (0..pages)
        .map(|page| Rect::new(2 + 3 * page as u16, HERO_ROW + 3, 2, 1))
        .collect();
    ControlRegions::new(Rect::new(0, 0, width, 5))
        .with_prev(Rect::new(2, HERO_ROW + 1, 3, 1))
        .with_next(Rect::new(width.saturating_sub(5), HERO_ROW + 1, 3, 1))
        .with_dots(dots)
}

fn cards_regions(width: u16, pages: usize) -> ControlRegions {
    let dots = (0..pages)
        .map(|page| Rect::new(2 + 3 * page as u16, CARDS_ROW + 3, 2, 1))
        .collect();
    ControlRegions::new(Rect::new(0, CARDS_ROW - 1, width, 6))
        .with_prev(Rect::new(2, CARDS_ROW + 1, 3, 1))
        .with_next(Rect::new(width.saturating_sub(5), CARDS_ROW + 1, 3, 1))
        .with_dots(dots)
}

fn dots_line(page: usize, pages: usize) -> String {
    (0..pages)
        .map(|p| if p == page { "\u{25cf} " } else { "\u{25cb} " })
        .collect()
}

fn draw(hero: &Carousel, cards: &Carousel, width: u16) -> std::io::Result<()> {
    let mut out = stdout();
    queue!(out, Clear(ClearType::All))?;

    // Hero: the active slot fills the marquee line.
    let slide = match hero.offset() {
        Offset::ActiveSlot(index) => index,
        _ => 0,
    };
    queue!(
        out,
        MoveTo(2, HERO_ROW),
        Print(format!(
            "Slide {} of {}{}",
            slide + 1,
            hero.len(),
            if hero.paused() { "  (held)" } else { "" }
        )),
        MoveTo(2, HERO_ROW + 1),
        Print("<"),
        MoveTo(width.saturating_sub(5), HERO_ROW + 1),
        Print(">"),
        MoveTo(2, HERO_ROW + 3),
        Print(dots_line(hero.page(), hero.page_count()))
    )?;

    // Cards: a strip of boxes shifted by the carousel's translation.
    let shift = match cards.offset() {
        Offset::Translate(shift) => shift,
        _ => 0.0,
    };
    queue!(
        out,
        MoveTo(2, CARDS_ROW),
        Print(format!(
            "Cards  page {}/{}  ({} per view{})",
            cards.page() + 1,
            cards.page_count(),
            cards.visible(),
            if cards.paused() { ", held" } else { "" }
        ))
    )?;
    for index in 0..cards.len() {
        let origin = 6.0 + index as f32 * (CARD_WIDTH + CARD_GAP) as f32 + shift;
        if origin < 6.0 || origin + CARD_WIDTH as f32 > (width.saturating_sub(6)) as f32 {
            continue;
        }
        queue!(
            out,
            MoveTo(origin as u16, CARDS_ROW + 1),
            Print(format!("[ card {:>2}      ]", index + 1))
        )?;
    }
    queue!(
        out,
        MoveTo(2, CARDS_ROW + 1),
        Print("<"),
        MoveTo(width.saturating_sub(5), CARDS_ROW + 1),
        Print(">"),
        MoveTo(2, CARDS_ROW + 3),
        Print(dots_line(cards.page(), cards.page_count())),
        MoveTo(2, CARDS_ROW + 5),
        Print("arrows/wheel page - digits jump - hover holds - q quits")
    )?;
    out.flush()
}
