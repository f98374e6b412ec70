use std::io::{self, Stderr, Stdout, Write};
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::config::Config;
use crate::domain::{ListState, ProductCard};
use crate::view::traits::View;

/// Prints the product list to `out` and alerts to `err`
pub struct TerminalView<O: Write, E: Write> {
    out: O,
    err: E,
    currency: String,
    animate: bool,
}

impl TerminalView<Stdout, Stderr> {
    pub fn stdio(config: &Config) -> Self {
        Self::new(io::stdout(), io::stderr(), &config.currency).with_animation(config.animate)
    }
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E, currency: &str) -> Self {
        Self {
            out,
            err,
            currency: currency.to_string(),
            animate: false,
        }
    }

    /// Print each card after its reveal delay instead of all at once
    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn write_state(&mut self, state: &ListState) -> io::Result<()> {
        match state {
            ListState::Loaded(cards) => self.write_cards(cards)?,
            _ => {
                if let Some(message) = state.message() {
                    writeln!(self.out, "{}", message)?;
                }
            }
        }
        self.out.flush()
    }

    fn write_cards(&mut self, cards: &[ProductCard]) -> io::Result<()> {
        writeln!(self.out, "Tracked products ({}):\n", cards.len())?;

        let mut shown_at = Duration::ZERO;
        for card in cards {
            if self.animate {
                thread::sleep(card.reveal_delay.saturating_sub(shown_at));
                shown_at = card.reveal_delay;
            }

            writeln!(self.out, "  {}. {}", card.index + 1, card.name)?;
            writeln!(self.out, "     Current Price: {}", card.price_label(&self.currency))?;
            writeln!(self.out, "     View Product: {}", card.url)?;
            writeln!(self.out)?;
            self.out.flush()?;
        }

        Ok(())
    }
}

impl<O: Write, E: Write> View for TerminalView<O, E> {
    fn render(&mut self, state: &ListState) {
        if let Err(e) = self.write_state(state) {
            warn!(error = %e, "failed to write product list");
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.err, "! {}", message).and_then(|_| self.err.flush()) {
            warn!(error = %e, "failed to write alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EMPTY_MESSAGE, LOADING_MESSAGE, LOAD_FAILED_MESSAGE};
    use products_api::Product;

    fn view() -> TerminalView<Vec<u8>, Vec<u8>> {
        TerminalView::new(Vec::new(), Vec::new(), "₹")
    }

    fn output(view: TerminalView<Vec<u8>, Vec<u8>>) -> (String, String) {
        let (out, err) = view.into_parts();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn product(name: &str, url: &str, price: f64) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            url: url.to_string(),
            current_price: price,
            previous_price: None,
            highest_price: None,
            lowest_price: None,
            last_updated: None,
        }
    }

    #[test]
    fn test_render_messages() {
        let mut view = view();
        view.render(&ListState::Loading);
        view.render(&ListState::Empty);
        view.render(&ListState::load_failed());

        let (out, err) = output(view);
        assert_eq!(
            out,
            format!("{}\n{}\n{}\n", LOADING_MESSAGE, EMPTY_MESSAGE, LOAD_FAILED_MESSAGE)
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_render_cards() {
        let state = ListState::from_products(&[
            product("Widget", "http://example.com/w", 19.99),
            product("Gadget", "http://example.com/g", 20.0),
        ]);

        let mut view = view();
        view.render(&state);

        let (out, _) = output(view);
        assert!(out.starts_with("Tracked products (2):"));
        assert!(out.contains("  1. Widget\n     Current Price: ₹19.99\n     View Product: http://example.com/w\n"));
        assert!(out.contains("  2. Gadget\n     Current Price: ₹20\n"));
        assert!(out.find("Widget").unwrap() < out.find("Gadget").unwrap());
    }

    #[test]
    fn test_alert_goes_to_err() {
        let mut view = view();
        view.alert("Please fill in all fields correctly.");

        let (out, err) = output(view);
        assert!(out.is_empty());
        assert_eq!(err, "! Please fill in all fields correctly.\n");
    }

    #[test]
    fn test_animation_waits_between_cards() {
        let state = ListState::from_products(&[
            product("A", "http://a", 1.0),
            product("B", "http://b", 2.0),
        ]);

        let mut view = view().with_animation(true);
        let started = std::time::Instant::now();
        view.render(&state);

        assert!(started.elapsed() >= crate::domain::REVEAL_STEP);
    }
}
