use anyhow::Result;
use async_openai::{
    types::{
        ChatCompletionRequestMessageArgs, ChatCompletionResponseStream,
        CreateChatCompletionRequestArgs, CreateEmbeddingRequestArgs,
    },
    Client,
};

use crate::message::{Message, Role};

const EMBEDDING_MODEL: &str = "text-embedding-3-small";
const CHAT_MODEL: &str = "gpt-4o-mini";

pub struct OpenAI {
    client: Client,
}

impl OpenAI {
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Embeds a query into a similarity-search vector.
    ///
    /// # Errors
    ///
    /// This function will return an error if the Embeddings API call fails or
    /// returns no embedding data.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let request = CreateEmbeddingRequestArgs::default()
            .model(EMBEDDING_MODEL)
            .input(text)
            .build()?;

        let response = self.client.embeddings().create(request).await?;

        Ok(response
            .data
            .first()
            .ok_or_else(|| anyhow::anyhow!("Could not find embedding"))?
            .embedding
            .clone())
    }

    /// Starts a streaming chat completion for the given conversation.
    ///
    /// # Errors
    ///
    /// This function will return an error if the request cannot be built or
    /// the Chat Completions API rejects it.
    pub async fn chat_stream(&self, messages: Vec<Message>) -> Result<ChatCompletionResponseStream> {
        let messages = messages
            .into_iter()
            .map(|message| {
                ChatCompletionRequestMessageArgs::default()
                    .role(message.role)
                    .content(message.content)
                    .build()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(CHAT_MODEL)
            .messages(messages)
            .build()?;

        Ok(self.client.chat().create_stream(request).await?)
    }
}

impl Default for OpenAI {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Role> for async_openai::types::Role {
    fn from(role: Role) -> Self {
        match role {
            Role::System => Self::System,
            Role::User => Self::User,
            Role::Assistant => Self::Assistant,
        }
    }
}
