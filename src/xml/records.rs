//! In-memory records the exporters serialize, plus the fixed demo data sets.

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub bank: String,
    pub buy: f64,
    pub sell: f64,
}

impl ExchangeRate {
    #[must_use]
    pub fn new(bank: impl Into<String>, buy: f64, sell: f64) -> Self {
        Self {
            bank: bank.into(),
            buy,
            sell,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    #[must_use]
    pub fn new(name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            price,
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: u32,
    pub date: NaiveDate,
    pub customer: String,
    pub products: Vec<Product>,
}

/// Three banks' buy/sell quotes.
#[must_use]
pub fn sample_exchange_rates() -> Vec<ExchangeRate> {
    vec![
        ExchangeRate::new("PrivatBank", 27.5, 28.1),
        ExchangeRate::new("Oschadbank", 27.6, 28.0),
        ExchangeRate::new("Ukrgasbank", 27.4, 28.2),
    ]
}

/// Two orders: one placed `today` with two products, one placed the day before with one.
#[must_use]
pub fn sample_orders(today: NaiveDate) -> Vec<Order> {
    vec![
        Order {
            id: 1,
            date: today,
            customer: "Ivanov I.I.".to_string(),
            products: vec![
                Product::new("Laptop", 25000.0, 1),
                Product::new("Mouse", 500.0, 2),
            ],
        },
        Order {
            id: 2,
            date: today.pred_opt().unwrap_or(today),
            customer: "Petrov P.P.".to_string(),
            products: vec![Product::new("Monitor", 8000.0, 3)],
        },
    ]
}
