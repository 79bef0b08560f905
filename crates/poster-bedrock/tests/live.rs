//! Integration test against the real Bedrock runtime.
//!
//! Requires valid credentials in the environment and model access in
//! us-east-1.
//!
//! Run with: `cargo test -p poster-bedrock --test live -- --ignored`

use poster_bedrock::bedrock::BedrockGenerator;
use poster_bedrock::generator::ContentGenerator;
use poster_core::models::generation::GenerationStatus;

#[tokio::test]
#[ignore]
async fn generates_a_poster_from_notes() {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new("us-east-1"))
        .load()
        .await;
    let model_id = std::env::var("POSTER_MODEL_ID")
        .unwrap_or_else(|_| "us.anthropic.claude-sonnet-4-6".to_string());
    let generator = BedrockGenerator::new(&config, model_id);

    let result = generator
        .generate("Does music tempo affect how fast people type?")
        .await
        .expect("generation should succeed");

    assert_eq!(result.transaction.status, GenerationStatus::Complete);
    assert!(result.transaction.output_tokens > 0);
    println!("{:#?}", result.content);
}
