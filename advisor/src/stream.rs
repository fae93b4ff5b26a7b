use anyhow::Result;
use async_fn_stream::try_fn_stream;
use async_openai::types::ChatCompletionResponseStream;
use futures::{Stream, StreamExt};

/// Relays a streaming chat completion as plain text fragments.
///
/// Fragments are emitted in upstream order, as they arrive. Chunks without
/// text content (role announcements, finish markers) are skipped. An upstream
/// failure is forwarded as the stream's final, erroring item; either way the
/// stream terminates exactly once.
pub fn relay(mut completion: ChatCompletionResponseStream) -> impl Stream<Item = Result<String>> {
    try_fn_stream(|emitter| async move {
        while let Some(response) = completion.next().await {
            let response = response?;

            let Some(choice) = response.choices.first() else {
                continue;
            };

            if let Some(content) = &choice.delta.content {
                if !content.is_empty() {
                    emitter.emit(content.clone()).await;
                }
            }
        }

        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::{error::OpenAIError, types::CreateChatCompletionStreamResponse};
    use serde_json::json;

    fn chunk(content: &str) -> CreateChatCompletionStreamResponse {
        serde_json::from_value(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion.chunk",
            "created": 0,
            "model": "gpt-4o-mini",
            "choices": [{"index": 0, "delta": {"content": content}, "finish_reason": null}],
        }))
        .unwrap()
    }

    fn finish_chunk() -> CreateChatCompletionStreamResponse {
        serde_json::from_value(json!({
            "id": "chatcmpl-test",
            "object": "chat.completion.chunk",
            "created": 0,
            "model": "gpt-4o-mini",
            "choices": [{"index": 0, "delta": {}, "finish_reason": "stop"}],
        }))
        .unwrap()
    }

    fn upstream(
        responses: Vec<Result<CreateChatCompletionStreamResponse, OpenAIError>>,
    ) -> ChatCompletionResponseStream {
        Box::pin(futures::stream::iter(responses))
    }

    #[tokio::test]
    async fn relays_deltas_in_order() {
        let completion = upstream(vec![
            Ok(chunk("Based")),
            Ok(chunk(" on")),
            Ok(chunk(" reviews...")),
            Ok(finish_chunk()),
        ]);

        let fragments = relay(completion)
            .collect::<Vec<_>>()
            .await
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(fragments, vec!["Based", " on", " reviews..."]);
    }

    #[tokio::test]
    async fn skips_chunks_without_content() {
        let completion = upstream(vec![Ok(finish_chunk())]);

        let fragments = relay(completion).collect::<Vec<_>>().await;

        assert!(fragments.is_empty());
    }

    #[tokio::test]
    async fn forwards_upstream_errors_and_ends() {
        let completion = upstream(vec![
            Ok(chunk("Hello")),
            Err(OpenAIError::StreamError("connection reset".to_string())),
            Ok(chunk("never delivered")),
        ]);

        let mut fragments = Box::pin(relay(completion));

        assert_eq!(fragments.next().await.unwrap().unwrap(), "Hello");
        assert!(fragments.next().await.unwrap().is_err());
        assert!(fragments.next().await.is_none());
    }
}
