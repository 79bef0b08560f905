use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message, SystemContentBlock};
use poster_core::models::generation::{GenerationStatus, GenerationTransaction};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::GenerationError;
use crate::generator::{BoxFuture, ContentGenerator, GenerationResult};
use crate::parse::parse_generated;
use crate::prompt::{SYSTEM_PROMPT, render_user_prompt};

/// Token counts reported by a Converse call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenCount {
    pub input: u64,
    pub output: u64,
}

/// [`ContentGenerator`] backed by the Bedrock Converse API.
pub struct BedrockGenerator {
    client: Client,
    model_id: String,
}

impl BedrockGenerator {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(config),
            model_id: model_id.into(),
        }
    }

    pub fn from_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
        }
    }
}

impl ContentGenerator for BedrockGenerator {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn generate<'a>(
        &'a self,
        notes: &'a str,
    ) -> BoxFuture<'a, Result<GenerationResult, GenerationError>> {
        Box::pin(async move {
            let transaction_id = Uuid::new_v4();
            info!(transaction_id = %transaction_id, model = %self.model_id, "starting poster generation");

            let user_message = render_user_prompt(notes)?;
            let (response_text, tokens) =
                invoke_converse(&self.client, &self.model_id, SYSTEM_PROMPT, &user_message).await?;

            let content = parse_generated(&response_text).inspect_err(|e| {
                warn!(transaction_id = %transaction_id, error = %e, "generated content rejected");
            })?;

            info!(
                transaction_id = %transaction_id,
                fields = content.fields.len(),
                input_tokens = tokens.input,
                output_tokens = tokens.output,
                "poster generation complete"
            );

            Ok(GenerationResult {
                transaction: GenerationTransaction {
                    id: transaction_id,
                    model_id: self.model_id.clone(),
                    status: GenerationStatus::Complete,
                    input_tokens: tokens.input,
                    output_tokens: tokens.output,
                    created_at: jiff::Timestamp::now(),
                },
                content,
            })
        })
    }
}

/// Core invocation using the Bedrock Converse API.
/// Returns the response text and token usage.
async fn invoke_converse(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
) -> Result<(String, TokenCount), GenerationError> {
    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| GenerationError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| GenerationError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| GenerationError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let tokens = response
        .usage()
        .map(|u| TokenCount {
            input: u.input_tokens as u64,
            output: u.output_tokens as u64,
        })
        .unwrap_or_default();

    Ok((response_text, tokens))
}
