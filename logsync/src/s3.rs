//! # S3 store
//!
//! The production [`ObjectStore`]: `HeadObject` for the existence/size check
//! and `PutObject` for uploads, on a client built from the sync config
//! (region, optional named profile, optional custom endpoint).
//!
//! Credentials come from the profile when one is configured, otherwise from
//! the default AWS provider chain (environment, shared files, instance role).

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use logsync_core::config::SyncConfig;
use logsync_core::contract::{ObjectStore, RemoteObjectMeta, StoreError};

/// Renders an SDK error with its full source chain; plain `Display` often
/// stops at "unhandled error".
fn describe_error<E: std::error::Error>(err: &E) -> String {
    DisplayErrorContext(err).to_string()
}

pub struct S3Store {
    client: Client,
}

impl S3Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn connect(config: &SyncConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let Some(profile) = config.profile() {
            loader = loader.profile_name(profile);
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        let aws_config = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&aws_config)
            .force_path_style(config.endpoint.is_some())
            .build();

        tracing::info!(
            region = %config.region,
            profile = config.profile().unwrap_or("<default>"),
            endpoint = config.endpoint.as_deref().unwrap_or("<aws>"),
            "Initialized S3 client"
        );
        Self::new(Client::from_conf(s3_config))
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn head(&self, bucket: &str, key: &str) -> Result<RemoteObjectMeta, StoreError> {
        match self.client.head_object().bucket(bucket).key(key).send().await {
            Ok(resp) => Ok(RemoteObjectMeta {
                exists: true,
                size_bytes: resp.content_length().and_then(|len| u64::try_from(len).ok()),
            }),
            Err(e) => {
                let service_err = e.into_service_error();
                if service_err.is_not_found() {
                    tracing::debug!(bucket, key, "Object not found");
                    Ok(RemoteObjectMeta::missing())
                } else {
                    let detail = describe_error(&service_err);
                    tracing::error!(bucket, key, error = %detail, "HeadObject failed");
                    Err(StoreError::Service(detail))
                }
            }
        }
    }

    async fn put(
        &self,
        bucket: &str,
        key: &str,
        body: tokio::fs::File,
    ) -> Result<String, StoreError> {
        let stream = ByteStream::read_from()
            .file(body)
            .build()
            .await
            .map_err(|e| StoreError::Io(std::io::Error::other(e.to_string())))?;

        let resp = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .body(stream)
            .send()
            .await
            .map_err(|e| {
                let detail = describe_error(&e);
                tracing::error!(bucket, key, error = %detail, "PutObject failed");
                StoreError::Service(detail)
            })?;

        tracing::debug!(bucket, key, e_tag = ?resp.e_tag(), "PutObject succeeded");
        Ok(format!("s3://{bucket}/{key}"))
    }
}
