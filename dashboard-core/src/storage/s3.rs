use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{BucketLocationConstraint, CreateBucketConfiguration};

use crate::config::Config;

use super::ObjectStore;

/// S3-backed object store. Credentials come from the SDK default chain
/// (environment, shared config, instance metadata).
#[derive(Debug, Clone)]
pub struct S3Store {
    client: Client,
    bucket: String,
    region: String,
}

impl S3Store {
    pub async fn connect(config: &Config) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        Self {
            client: Client::new(&shared),
            bucket: config.bucket_name.clone(),
            region: config.region.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn bucket_name(&self) -> &str {
        &self.bucket
    }

    async fn head_bucket(&self) -> Result<()> {
        self.client
            .head_bucket()
            .bucket(&self.bucket)
            .send()
            .await
            .with_context(|| format!("Bucket probe failed for '{}'", self.bucket))?;

        Ok(())
    }

    async fn create_bucket(&self) -> Result<()> {
        let constraint = BucketLocationConstraint::from(self.region.as_str());
        let bucket_config = CreateBucketConfiguration::builder()
            .location_constraint(constraint)
            .build();

        self.client
            .create_bucket()
            .bucket(&self.bucket)
            .create_bucket_configuration(bucket_config)
            .send()
            .await
            .with_context(|| {
                format!("Failed to create bucket '{}' in {}", self.bucket, self.region)
            })?;

        Ok(())
    }

    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .with_context(|| format!("Failed to write object '{key}' to '{}'", self.bucket))?;

        Ok(())
    }
}
