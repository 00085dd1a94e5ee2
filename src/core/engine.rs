use crate::core::classifier::classify;
use crate::core::menu::Menu;
use crate::domain::model::{Order, Receipt};
use crate::domain::ports::MenuItem;
use crate::utils::error::Result;

pub struct OrderEngine {
    menu: Menu,
}

impl OrderEngine {
    pub fn new(menu: Menu) -> Self {
        Self { menu }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn price_order(&self, order: &Order) -> Result<Receipt> {
        let item = self.menu.build(order)?;

        Ok(Receipt {
            total: item.price(),
            ingredients: item.ingredients(),
            customer_gender: order.gender_code.map(|code| classify(code).to_string()),
        })
    }

    pub fn run(&self, orders: &[Order]) -> Result<Vec<Receipt>> {
        println!("Pricing {} orders...", orders.len());

        let mut receipts = Vec::with_capacity(orders.len());
        for (index, order) in orders.iter().enumerate() {
            let receipt = self.price_order(order)?;
            println!(
                "Order {}: {} + {} toppings -> {}",
                index + 1,
                order.crust,
                order.toppings.len(),
                receipt.total
            );
            receipts.push(receipt);
        }

        println!("Priced {} orders", receipts.len());
        Ok(receipts)
    }
}
