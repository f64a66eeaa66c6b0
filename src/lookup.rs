use tracing::{debug, instrument, warn};

use crate::{Config, DnsError, Message, Name, Query, TransactionTable};

/// What became of a query whose reply was decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Answer {
        id: u16,
        index: usize,
        question: Name,
        rdata: String,
    },
    /// The answer carried no rdata we can show
    NoRecords { id: u16, index: usize },
    /// The reply's id was never sent
    NoMatch { id: u16 },
}

/// Send one query and match its reply against `table`.
///
/// The id is stored before sending, so it stays in the table even if the
/// send or the decode fails.
#[instrument(level = "debug", skip(config, table))]
pub async fn lookup(
    domain: &str,
    record_type: &str,
    config: &Config,
    table: &mut TransactionTable,
) -> Result<Outcome, DnsError> {
    let query = Query::new(domain, record_type)?;
    table.store(query.id);

    let reply = config
        .selector()
        .send(&query.buffer, &config.server, config.port)
        .await?;

    let message = Message::from_bytes(&reply).map_err(|e| {
        warn!(error = %e, len = reply.len(), "failed to decode reply");
        e
    })?;
    debug!(id = message.header.id, offset = message.offset.position(), "decoded reply");

    Ok(correlate(&message, table))
}

pub fn correlate(message: &Message, table: &TransactionTable) -> Outcome {
    let id = message.header.id;

    let Some(index) = table.index_of(id) else {
        return Outcome::NoMatch { id };
    };

    match &message.answer {
        Some(answer) if !answer.data.is_empty() => Outcome::Answer {
            id,
            index,
            question: message.question.name.clone(),
            rdata: answer.rdata(),
        },
        _ => Outcome::NoRecords { id, index },
    }
}
