#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod message;
pub mod openai;
pub mod pinecone;
pub mod prompt;
pub mod stream;

pub use message::{Message, Role};
pub use openai::OpenAI;
pub use pinecone::{Pinecone, ProfessorMatch, ReviewMetadata};

use anyhow::Result;
use futures::Stream;
use tracing::debug;

/// Pinecone namespace holding the professor review index.
pub const REVIEW_NAMESPACE: &str = "ns1";

/// Answers a student's question about professors.
///
/// The last message's content is embedded and used to retrieve the closest
/// review records, which are spliced into the conversation before the
/// completion call. The returned stream yields answer fragments in
/// generation order.
///
/// # Errors
///
/// Returns an error if the conversation is empty, or if the embedding,
/// search, or completion request fails before streaming begins. Failures
/// while the completion is streaming surface as items on the returned
/// stream instead.
pub async fn answer(messages: Vec<Message>) -> Result<impl Stream<Item = Result<String>>> {
    let client = OpenAI::new();
    let reviews = Pinecone::new().namespace(REVIEW_NAMESPACE);

    let (history, last) = split_last(messages)?;

    let vector = client.embed(&last.content).await?;
    let matches = reviews.query(vector).await?;
    debug!("Retrieved {} reviews for the query", matches.len());

    let completion = client
        .chat_stream(prompt::build_messages(history, last, &matches))
        .await?;

    Ok(stream::relay(completion))
}

/// Splits a conversation into its history and the final message, whose
/// content becomes the embedding query.
fn split_last(mut messages: Vec<Message>) -> Result<(Vec<Message>, Message)> {
    let last = messages
        .pop()
        .ok_or_else(|| anyhow::anyhow!("Conversation has no messages"))?;

    Ok((messages, last))
}
