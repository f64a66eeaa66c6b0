use std::path::PathBuf;

use tokio::io::AsyncWriteExt;

use crate::{Outcome, TransactionTable};

/// Where results go. Both variants print to stdout; `File` also appends each
/// answer to its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Console,
    File(PathBuf),
}

impl Output {
    pub fn display(&self, message: &str) {
        println!("{message}");
    }

    pub async fn store(&self, data: &str) -> std::io::Result<()> {
        match self {
            Self::Console => Ok(()),
            Self::File(path) => {
                let mut file = tokio::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?;
                file.write_all(data.as_bytes()).await?;
                file.flush().await
            }
        }
    }

    pub async fn report(
        &self,
        outcome: &Outcome,
        table: &TransactionTable,
    ) -> std::io::Result<()> {
        match outcome {
            Outcome::NoMatch { .. } => {
                self.display("No matching transaction ID found for response.");
            }
            Outcome::NoRecords { .. } => self.display("No records found."),
            Outcome::Answer {
                id,
                question,
                rdata,
                ..
            } => {
                match self {
                    Self::File(_) => {
                        self.store(&format!(
                            "\nTransaction ID: {id}\tQuestion: {question} \tAnswer: {rdata}\n"
                        ))
                        .await?;
                    }
                    Self::Console => {
                        self.display(&format!("Transaction ID: {id}"));
                        self.display(&format!("Question: {question}"));
                        self.display(&format!("Answer: {rdata}"));
                    }
                }
                self.display(&format!(
                    "Current state of transaction table: {}",
                    table.to_json()?
                ));
            }
        }

        Ok(())
    }
}
