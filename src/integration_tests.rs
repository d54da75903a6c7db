#[cfg(test)]
mod tests {
    use crate::app_system::{OrderSystem, SystemSettings};
    use crate::clients::NewOrder;
    use crate::domain::OrderStatus;
    use crate::menu::{Menu, ScriptedConsole};
    use crate::order_actor::OrderError;

    fn new_order(id: &str, selection: Vec<usize>) -> NewOrder {
        NewOrder {
            id: id.to_string(),
            user: "alice".to_string(),
            delivery_address: "Main St 1".to_string(),
            selection,
        }
    }

    #[tokio::test]
    async fn test_order_lifecycle_through_system() {
        let system = OrderSystem::start(&SystemSettings::default()).await.unwrap();
        let orders = system.order_client.clone();

        assert_eq!(orders.ensure_orders().await, Err(OrderError::NoOrders));
        assert_eq!(orders.report().await, Err(OrderError::NoOrders));

        // Create: fresh id appends exactly one, duplicate is rejected
        let order = orders.create_order(new_order("ORD-1", vec![1, 2, 3])).await.unwrap();
        assert_eq!(order.total(), 1300.0);
        assert_eq!(orders.list_orders().await.unwrap().len(), 1);
        assert_eq!(
            orders.create_order(new_order("ORD-1", vec![2])).await.unwrap_err(),
            OrderError::AlreadyExists("ORD-1".into())
        );
        assert_eq!(orders.list_orders().await.unwrap().len(), 1);

        // Cart edits keep the total in sync
        assert!(orders.remove_from_cart("ORD-1".into(), "P002".into()).await.unwrap());
        assert!(!orders.remove_from_cart("ORD-1".into(), "P404".into()).await.unwrap());
        assert_eq!(orders.find_order("ORD-1".into()).await.unwrap().total(), 1275.0);
        assert_eq!(orders.add_to_cart("ORD-1".into(), "P002".into()).await.unwrap(), 1300.0);
        assert_eq!(
            orders.add_to_cart("ORD-1".into(), "P999".into()).await,
            Err(OrderError::InvalidProduct("P999".into()))
        );

        // Update: permissive transitions
        orders.cancel_order("ORD-1".into()).await.unwrap();
        let shipped = orders.confirm_order("ORD-1".into()).await.unwrap();
        let found = orders.find_order("ORD-1".into()).await.unwrap();
        assert_eq!(found.status(), &OrderStatus::Confirmed);
        assert_eq!(found.shipment_date(), Some(shipped));

        let found = orders.update_status("ORD-1".into(), "On hold".into()).await.unwrap();
        assert_eq!(found.status(), &OrderStatus::Other("On hold".into()));
        let found = orders.update_address("ORD-1".into(), "Elm St 9".into()).await.unwrap();
        assert_eq!(found.delivery_address(), "Elm St 9");
        assert_eq!(
            orders.update_address("ORD-1".into(), "  ".into()).await,
            Err(OrderError::MissingField("Delivery address"))
        );
        assert_eq!(
            orders.confirm_order("ORD-404".into()).await,
            Err(OrderError::NotFound("ORD-404".into()))
        );

        // Delete: shrinks by one and the id disappears
        orders.create_order(new_order("ORD-2", vec![2])).await.unwrap();
        orders.delete_order("ORD-1".into()).await.unwrap();
        let remaining = orders.list_orders().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id(), "ORD-2");
        assert_eq!(
            orders.find_order("ORD-1".into()).await,
            Err(OrderError::NotFound("ORD-1".into()))
        );

        drop(orders);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_report_over_three_orders() {
        let system = OrderSystem::start(&SystemSettings::default()).await.unwrap();
        let products = system.product_client.clone();
        let orders = system.order_client.clone();

        // Prices chosen so the carts total 100, 200 and 300
        for (code, price) in [("P001", 100.0), ("P002", 200.0), ("P003", 300.0)] {
            let patch = crate::domain::ProductPatch { price: Some(price), ..Default::default() };
            products.update_product(code.into(), patch).await.unwrap();
        }
        for (id, position) in [("A", 1), ("B", 2), ("C", 3)] {
            orders.create_order(new_order(id, vec![position])).await.unwrap();
        }
        orders.cancel_order("C".into()).await.unwrap();

        let report = orders.report().await.unwrap();
        assert_eq!(report.order_count, 3);
        assert_eq!(report.total_sales, 600.0);
        assert_eq!(format!("{:.2}", report.average_total), "200.00");
        assert_eq!(format!("{:.2}", report.max_total), "300.00");
        assert_eq!(format!("{:.2}", report.min_total), "100.00");
        assert_eq!((report.pending, report.confirmed, report.cancelled), (2, 0, 1));

        drop((products, orders));
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_scripted_menu_session() {
        let system = OrderSystem::start(&SystemSettings::default()).await.unwrap();

        let console = ScriptedConsole::new(&[
            "2",                                    // list: none yet
            "3",                                    // find: short-circuits on empty collection
            "1", "ORD-1", "alice", "Main St 1", "1,3,9",
            "1", "ORD-1",                           // duplicate id
            "1", "",                                // missing id
            "4", "ORD-1", "3",                      // confirm
            "3", "ORD-404",                         // not found
            "6",                                    // report
            "5", "ORD-1", "n",                      // delete declined
            "5", "ORD-1", "y",                      // delete confirmed
            "9",                                    // invalid option
            // input closed -> exit
        ]);
        let mut menu = Menu::new(console, system.order_client.clone());
        menu.run().await;
        let console = menu.into_console();

        let alerts = console.alerts;
        assert_eq!(alerts[0], "No orders registered.");
        assert_eq!(alerts[1], "No orders registered.");
        assert_eq!(alerts[2], "Order ORD-1 created.\nTotal: 1275");
        assert_eq!(alerts[3], "An order with ID ORD-1 already exists.");
        assert_eq!(alerts[4], "Order ID is required.");
        assert!(alerts[5].starts_with("Updating order: ID: ORD-1 | Status: Pending"));
        assert_eq!(alerts[6], "Order confirmed.");
        assert_eq!(alerts[7], "Order not found: ORD-404");
        assert!(alerts[8].contains("- Confirmed: 1"));
        assert!(alerts[8].contains("Total sales: $1275.00"));
        assert_eq!(alerts[9], "Deletion cancelled.");
        assert_eq!(alerts[10], "Order ORD-1 deleted.");
        assert_eq!(alerts[11], "Invalid option. Please choose an option from 1 to 7.");
        assert_eq!(alerts[12], "Thank you for using the Order Management System.");
        assert_eq!(alerts.len(), 13);

        assert!(system.order_client.list_orders().await.unwrap().is_empty());
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_menu_create_stops_at_empty_user_or_address() {
        let system = OrderSystem::start(&SystemSettings::default()).await.unwrap();

        let console = ScriptedConsole::new(&[
            "1", "ORD-1", "",                       // empty user name
            "1", "ORD-1", "alice", "  ",            // blank address
            "7",
        ]);
        let mut menu = Menu::new(console, system.order_client.clone());
        menu.run().await;
        let console = menu.into_console();

        assert_eq!(
            console.alerts,
            vec![
                "User name is required.",
                "Delivery address is required.",
                "Thank you for using the Order Management System.",
            ]
        );
        assert!(!console.prompts.iter().any(|p| p.starts_with("Available products:")));
        assert_eq!(console.prompts.len(), 8);
        assert!(system.order_client.list_orders().await.unwrap().is_empty());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_menu_update_sub_options() {
        let system = OrderSystem::start(&SystemSettings::default()).await.unwrap();
        system
            .order_client
            .create_order(new_order("ORD-1", vec![1, 3]))
            .await
            .unwrap();

        let console = ScriptedConsole::new(&[
            "4", "ORD-1", "1", "Shipped",
            "4", "ORD-1", "1", "  ",
            "4", "ORD-1", "2", "Elm St 9",
            "4", "ORD-1", "5",
            "4", "ORD-1", "x",
            "4", "ORD-1", "4",
            "4", "ORD-1", "6", "P002",
            "4", "ORD-1", "6", "P999",
            "4", "ORD-1", "7", "P001",
            "4", "ORD-1", "7", "P404",
            "7",
        ]);
        let mut menu = Menu::new(console, system.order_client.clone());
        menu.run().await;
        let alerts = menu.into_console().alerts;

        assert_eq!(alerts.len(), 21);
        assert!(alerts[2].starts_with("Updating order: ID: ORD-1 | Status: Shipped"));
        let outcomes: Vec<&str> = alerts.iter().skip(1).step_by(2).map(String::as_str).collect();
        assert_eq!(
            outcomes,
            vec![
                "Status updated.",
                "Status is required.",
                "Address updated.",
                "Update aborted.",
                "Invalid option.",
                "Order cancelled.",
                "Product added.\nTotal: 1300",
                "Invalid product: P999",
                "Product removed.\nTotal: 100",
                "Product P404 is not in the cart.",
            ]
        );
        assert_eq!(alerts[20], "Thank you for using the Order Management System.");

        let order = system.order_client.find_order("ORD-1".into()).await.unwrap();
        assert_eq!(order.status(), &OrderStatus::Cancelled);
        assert_eq!(order.delivery_address(), "Elm St 9");
        assert_eq!(order.total(), 100.0);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_menu_find_shows_detail_and_invoice() {
        let system = OrderSystem::start(&SystemSettings::default()).await.unwrap();
        system
            .order_client
            .create_order(new_order("ORD-7", vec![2, 2]))
            .await
            .unwrap();

        let console = ScriptedConsole::new(&["3", "ORD-7", "7"]);
        let mut menu = Menu::new(console, system.order_client.clone());
        menu.run().await;
        let console = menu.into_console();

        let detail = &console.alerts[0];
        assert!(detail.contains("ID: ORD-7 | Status: Pending | Total: 50 | Address: Main St 1"));
        assert!(detail.contains("User: alice, Total: 50, Status: Pending"));
        assert!(detail.contains("=== INVOICE ==="));
        assert!(detail.contains("Shipment Date: Pending"));
        assert_eq!(console.prompts.len(), 3);

        system.shutdown().await.unwrap();
    }
}
