use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub index: usize,
    #[serde(rename = "transactionID")]
    pub id: u16,
}

/// Ids of every query sent so far, in order. Indices start at 1.
#[derive(Debug, Default)]
pub struct TransactionTable {
    transactions: Vec<Transaction>,
}

impl TransactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, id: u16) -> usize {
        let index = self.transactions.len() + 1;
        self.transactions.push(Transaction { index, id });
        index
    }

    /// Index of the first query sent with `id`.
    pub fn index_of(&self, id: u16) -> Option<usize> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.index)
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The table as a JSON array of `{"index", "transactionID"}` objects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.transactions)
    }
}

#[cfg(test)]
mod tests {
    use super::TransactionTable;

    #[test]
    fn indexes_from_one() {
        let mut table = TransactionTable::new();

        assert_eq!(table.store(0xaaaa), 1);
        assert_eq!(table.store(0xbbbb), 2);
        assert_eq!(table.index_of(0xbbbb), Some(2));
        assert_eq!(table.index_of(0xcccc), None);
        assert_eq!(table.entries().len(), 2);
    }

    #[test]
    fn serializes_as_json() {
        let mut table = TransactionTable::new();
        assert_eq!(table.to_json().unwrap(), "[]");

        table.store(4660);
        table.store(7);
        assert_eq!(
            table.to_json().unwrap(),
            r#"[{"index":1,"transactionID":4660},{"index":2,"transactionID":7}]"#
        );
    }
}
