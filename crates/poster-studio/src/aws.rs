use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::CredentialSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub account_id: String,
    pub arn: String,
    pub user_id: String,
}

/// Outcome of the one-time startup credential check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    Available(CallerIdentity),
    /// Generation is disabled for the session; editing and export still work.
    Missing(String),
}

impl CredentialStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, CredentialStatus::Available(_))
    }
}

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(aws_sdk_sts::config::Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "poster-studio-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Call STS GetCallerIdentity to validate credentials.
pub async fn validate_credentials(config: &aws_config::SdkConfig) -> eyre::Result<CallerIdentity> {
    if config.credentials_provider().is_none() {
        return Err(eyre::eyre!("no credentials provider configured"));
    }

    let sts = aws_sdk_sts::Client::new(config);
    let resp = sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| eyre::eyre!("STS GetCallerIdentity failed: {e}"))?;

    Ok(CallerIdentity {
        account_id: resp.account().unwrap_or_default().to_string(),
        arn: resp.arn().unwrap_or_default().to_string(),
        user_id: resp.user_id().unwrap_or_default().to_string(),
    })
}

/// Check credentials once at startup. A failure is reported, never retried.
pub async fn check_credentials(config: &aws_config::SdkConfig) -> CredentialStatus {
    match validate_credentials(config).await {
        Ok(identity) => {
            info!(account_id = %identity.account_id, arn = %identity.arn, "AWS credentials valid");
            CredentialStatus::Available(identity)
        }
        Err(e) => {
            warn!(error = %e, "AWS credentials unavailable; content generation disabled");
            CredentialStatus::Missing(e.to_string())
        }
    }
}
