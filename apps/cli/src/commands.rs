//! # Cart Commands
//!
//! Command-line surface over [`CartManager`].
//!
//! ## Cart Display
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  $ rocketshoes add 1                                                    │
//! │                                                                         │
//! │     1  Tênis de Caminhada Leve Confortável    2 x 179.90 =    359.80    │
//! │     3  Tênis Adidas Duramo Lite 2.0           1 x 219.90 =    219.90    │
//! │                                                                         │
//! │  2 products, 3 units                          Subtotal       579.70     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected command prints a warning on stderr and leaves the cart as it
//! was; the exit code is still zero.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rocket_cart::CartManager;
use rocket_core::{Cart, Notice, Notifier, ProductId};
use tracing::debug;

/// RocketShoes shopping cart.
#[derive(Debug, Parser)]
#[command(name = "rocketshoes", version, about)]
pub struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storefront API base URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// SQLite database file holding the cart.
    #[arg(long, global = true)]
    pub db_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the cart.
    Show,

    /// Add one unit of a product.
    Add { product_id: ProductId },

    /// Set the quantity of a product already in the cart.
    Update {
        product_id: ProductId,

        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },

    /// Remove a product from the cart.
    Remove { product_id: ProductId },
}

/// Runs one command against the manager.
pub async fn execute(manager: &mut CartManager, command: &Command) {
    debug!(?command, "Executing command");

    match *command {
        Command::Show => {}
        Command::Add { product_id } => manager.add_product(product_id).await,
        Command::Update { product_id, amount } => {
            manager.update_product_amount(product_id, amount).await
        }
        Command::Remove { product_id } => manager.remove_product(product_id).await,
    }
}

/// Terminal rendering of a cart.
pub struct CartView<'a>(pub &'a Cart);

impl fmt::Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cart = self.0;
        if cart.is_empty() {
            return writeln!(f, "Cart is empty");
        }

        for item in cart {
            writeln!(
                f,
                "{:>4}  {:<36} {:>3} x {:>8} = {:>10}",
                item.id,
                item.title,
                item.amount,
                item.price,
                item.line_total()
            )?;
        }

        let totals = cart.totals();
        writeln!(f)?;
        writeln!(
            f,
            "{} {}, {} {}    Subtotal {:>10}",
            totals.item_count,
            if totals.item_count == 1 { "product" } else { "products" },
            totals.total_quantity,
            if totals.total_quantity == 1 { "unit" } else { "units" },
            totals.subtotal
        )
    }
}

/// Prints notices to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn warn(&self, notice: &Notice) {
        eprintln!("warning: {}", notice.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rocket_core::{CartItem, Money};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rocketshoes").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse(&["show"]).command, Command::Show);
        assert_eq!(
            parse(&["add", "3"]).command,
            Command::Add {
                product_id: ProductId::new(3)
            }
        );
        assert_eq!(
            parse(&["remove", "3"]).command,
            Command::Remove {
                product_id: ProductId::new(3)
            }
        );
    }

    #[test]
    fn test_update_accepts_non_positive_amounts() {
        assert_eq!(
            parse(&["update", "2", "-1"]).command,
            Command::Update {
                product_id: ProductId::new(2),
                amount: -1
            }
        );
        assert_eq!(
            parse(&["update", "2", "0"]).command,
            Command::Update {
                product_id: ProductId::new(2),
                amount: 0
            }
        );
    }

    #[test]
    fn test_global_flags() {
        let cli = parse(&["show", "--api-url", "http://127.0.0.1:4000", "--db-path", "/tmp/c.db"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://127.0.0.1:4000"));
        assert_eq!(cli.db_path, Some(PathBuf::from("/tmp/c.db")));
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["rocketshoes", "add", "shoe"]).is_err());
    }

    #[test]
    fn test_render_empty_cart() {
        assert_eq!(CartView(&Cart::new()).to_string(), "Cart is empty\n");
    }

    #[test]
    fn test_render_cart() {
        let cart = Cart::from_items(vec![
            CartItem {
                id: ProductId::new(1),
                title: "Tênis de Caminhada".to_string(),
                price: Money::from_cents(17990),
                image: String::new(),
                amount: 2,
            },
            CartItem {
                id: ProductId::new(3),
                title: "Tênis Duramo".to_string(),
                price: Money::from_cents(21990),
                image: String::new(),
                amount: 1,
            },
        ]);

        let text = CartView(&cart).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Tênis de Caminhada"));
        assert!(lines[0].ends_with("359.80"));
        assert!(lines[3].starts_with("2 products, 3 units"));
        assert!(lines[3].ends_with("579.70"));
    }
}
