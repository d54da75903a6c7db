//! Interactive command surface: the numbered main menu and its prompts.

mod console;

pub use console::*;

use std::fmt::Write;
use tracing::{debug, info, instrument};

use crate::clients::{require_field, NewOrder, OrderClient};
use crate::domain::Order;
use crate::order_actor::OrderError;

const MAIN_MENU: &str = "=== ORDER MANAGEMENT SYSTEM ===

1. Create new order
2. Show all orders
3. Find order by ID
4. Update order
5. Delete order
6. Generate report
7. Exit

Choose an option (1-7):";

const UPDATE_MENU: &str = "What do you want to update?
1. Order status
2. Delivery address
3. Confirm order
4. Cancel order
5. Abort update
6. Add product to cart
7. Remove product from cart";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Find,
    Update,
    Delete,
    Report,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Create),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Find),
            "4" => Some(MenuChoice::Update),
            "5" => Some(MenuChoice::Delete),
            "6" => Some(MenuChoice::Report),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Parses a comma-separated list of 1-based positions, e.g. `"1, 3"`.
/// Entries that are not non-negative integers are dropped.
pub fn parse_selection(input: &str) -> Vec<usize> {
    input
        .split(',')
        .filter_map(|part| part.trim().parse::<usize>().ok())
        .collect()
}

/// Full detail view used by "find by ID".
pub fn render_order_detail(order: &Order) -> String {
    format!(
        "=== ORDER DETAIL ===\n{}\n\n=== CART ===\n{}\n{}",
        order.describe(),
        order.cart().describe(),
        order.generate_invoice()
    )
}

/// Numbered one-line summaries.
pub fn render_order_list(orders: &[Order]) -> String {
    let mut out = String::from("=== ORDER LIST ===\n\n");
    for (index, order) in orders.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, order.describe());
    }
    out
}

/// Drives one interactive session. Each command runs to completion before the
/// next prompt is shown.
pub struct Menu<C: Console> {
    console: C,
    orders: OrderClient,
}

impl<C: Console> Menu<C> {
    pub fn new(console: C, orders: OrderClient) -> Self {
        Self { console, orders }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs until the operator picks Exit or closes the input.
    #[instrument(name = "menu", skip(self))]
    pub async fn run(&mut self) {
        loop {
            let choice = match self.console.prompt(MAIN_MENU) {
                Some(input) => MenuChoice::parse(&input),
                None => Some(MenuChoice::Exit),
            };
            debug!(?choice, "Menu selection");

            let outcome = match choice {
                Some(MenuChoice::Create) => self.create_order().await.map_err(create_failure),
                Some(MenuChoice::List) => self.list_orders().await.map_err(|e| e.to_string()),
                Some(MenuChoice::Find) => self.find_order().await.map_err(|e| e.to_string()),
                Some(MenuChoice::Update) => self.update_order().await.map_err(|e| e.to_string()),
                Some(MenuChoice::Delete) => self.delete_order().await.map_err(|e| e.to_string()),
                Some(MenuChoice::Report) => self.report().await.map_err(|e| e.to_string()),
                Some(MenuChoice::Exit) => {
                    self.console.alert("Thank you for using the Order Management System.");
                    info!("Session ended");
                    break;
                }
                None => Ok("Invalid option. Please choose an option from 1 to 7.".to_string()),
            };

            match outcome {
                Ok(message) | Err(message) => self.console.alert(&message),
            }
        }
    }

    fn ask(&mut self, message: &str) -> String {
        self.console.prompt(message).unwrap_or_default()
    }

    fn ask_order_id(&mut self, message: &str) -> Result<String, OrderError> {
        require_field(&self.ask(message), "Order ID")
    }

    async fn catalog_listing(&self) -> Result<String, OrderError> {
        let mut listing = String::from("Available products:\n");
        for (index, product) in self.orders.catalog().await?.iter().enumerate() {
            let _ = writeln!(listing, "{}. {}", index + 1, product.describe());
        }
        Ok(listing)
    }

    async fn create_order(&mut self) -> Result<String, OrderError> {
        let id = self.ask_order_id("Enter the order ID:")?;
        if self.orders.order_exists(id.clone()).await? {
            return Err(OrderError::AlreadyExists(id));
        }

        let user = require_field(&self.ask("Enter the user name:"), "User name")?;
        let delivery_address = require_field(&self.ask("Enter the delivery address:"), "Delivery address")?;

        let mut listing = self.catalog_listing().await?;
        listing.push_str("\nEnter product numbers separated by commas (e.g. 1,2):");
        let selection = parse_selection(&self.ask(&listing));

        let order = self
            .orders
            .create_order(NewOrder { id, user, delivery_address, selection })
            .await?;
        Ok(format!("Order {} created.\nTotal: {}", order.id(), order.total()))
    }

    async fn list_orders(&mut self) -> Result<String, OrderError> {
        let orders = self.orders.list_orders().await?;
        if orders.is_empty() {
            return Err(OrderError::NoOrders);
        }
        Ok(render_order_list(&orders))
    }

    async fn find_order(&mut self) -> Result<String, OrderError> {
        self.orders.ensure_orders().await?;
        let id = self.ask_order_id("Enter the ID of the order to find:")?;
        let order = self.orders.find_order(id).await?;
        Ok(render_order_detail(&order))
    }

    async fn update_order(&mut self) -> Result<String, OrderError> {
        self.orders.ensure_orders().await?;
        let id = self.ask_order_id("Enter the ID of the order to update:")?;
        let order = self.orders.find_order(id.clone()).await?;
        self.console.alert(&format!("Updating order: {}", order.describe()));

        let option = self.console.prompt(UPDATE_MENU);
        let message = match option.as_deref().map(str::trim) {
            Some("1") => {
                let status = self.ask(&format!("Current status: {}\nEnter the new status:", order.status()));
                self.orders.update_status(id, status).await?;
                "Status updated.".to_string()
            }
            Some("2") => {
                let address = self.ask(&format!(
                    "Current address: {}\nEnter the new address:",
                    order.delivery_address()
                ));
                self.orders.update_address(id, address).await?;
                "Address updated.".to_string()
            }
            Some("3") => {
                self.orders.confirm_order(id).await?;
                "Order confirmed.".to_string()
            }
            Some("4") => {
                self.orders.cancel_order(id).await?;
                "Order cancelled.".to_string()
            }
            Some("5") | None => "Update aborted.".to_string(),
            Some("6") => {
                let mut listing = self.catalog_listing().await?;
                listing.push_str("\nEnter the code of the product to add:");
                let code = require_field(&self.ask(&listing), "Product code")?;
                let total = self.orders.add_to_cart(id, code).await?;
                format!("Product added.\nTotal: {}", total)
            }
            Some("7") => {
                let question = format!("{}\nEnter the code of the product to remove:", order.cart().describe());
                let code = require_field(&self.ask(&question), "Product code")?;
                if self.orders.remove_from_cart(id.clone(), code.clone()).await? {
                    let total = self.orders.find_order(id).await?.total();
                    format!("Product removed.\nTotal: {}", total)
                } else {
                    format!("Product {} is not in the cart.", code)
                }
            }
            Some(_) => "Invalid option.".to_string(),
        };
        Ok(message)
    }

    async fn delete_order(&mut self) -> Result<String, OrderError> {
        self.orders.ensure_orders().await?;
        let id = self.ask_order_id("Enter the ID of the order to delete:")?;
        let order = self.orders.find_order(id.clone()).await?;

        let question = format!("Are you sure you want to delete order {}?\n{}", id, order.describe());
        if !self.console.confirm(&question) {
            return Ok("Deletion cancelled.".to_string());
        }
        self.orders.delete_order(id.clone()).await?;
        Ok(format!("Order {} deleted.", id))
    }

    async fn report(&mut self) -> Result<String, OrderError> {
        Ok(self.orders.report().await?.to_string())
    }
}

/// Validation failures read as-is; anything else gets the create-failure prefix.
fn create_failure(err: OrderError) -> String {
    match err {
        OrderError::MissingField(_) | OrderError::AlreadyExists(_) => err.to_string(),
        other => format!("Failed to create the order: {}", other),
    }
}
