use serde::{Deserialize, Serialize};

/// A single recorded monetary event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Transaction {
    id: u32,
    category: String,
    amount: f64,
    description: String,
}

impl Transaction {
    pub(crate) fn new(id: u32, category: &str, amount: f64, description: &str) -> Transaction {
        let description = description.replace('\n', " ");
        Transaction {
            id,
            category: category.to_string(),
            amount,
            description,
        }
    }

    /// The id never changes after construction.
    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    pub(crate) fn category(&self) -> &str {
        &self.category
    }

    pub(crate) fn amount(&self) -> f64 {
        self.amount
    }

    pub(crate) fn description(&self) -> &str {
        &self.description
    }

    pub(crate) fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    pub(crate) fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub(crate) fn set_description(&mut self, description: &str) {
        self.description = description.replace('\n', " ");
    }
}
