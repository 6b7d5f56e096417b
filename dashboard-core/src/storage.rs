use async_trait::async_trait;
use log::{error, info};

pub mod s3;

/// Destination bucket operations. The trait is the seam mocked in archiver,
/// uploader and provisioning tests; production code uses [`s3::S3Store`].
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Name of the destination bucket, for log lines.
    fn bucket_name(&self) -> &str;

    /// Metadata probe for the destination bucket.
    async fn head_bucket(&self) -> anyhow::Result<()>;

    /// Create the destination bucket in the configured region.
    async fn create_bucket(&self) -> anyhow::Result<()>;

    /// Write one object under `key`.
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> anyhow::Result<()>;
}

/// Create the destination bucket if it does not exist.
///
/// Any probe error counts as "does not exist" and triggers one create
/// attempt. Creation errors are logged and swallowed; the run continues and
/// later writes report their own failures per city.
pub async fn ensure_bucket(store: &dyn ObjectStore) {
    let bucket = store.bucket_name();

    match store.head_bucket().await {
        Ok(()) => info!("bucket {bucket} exists"),
        Err(_) => {
            info!("creating bucket {bucket}");
            match store.create_bucket().await {
                Ok(()) => info!("successfully created bucket {bucket}"),
                Err(err) => error!("error creating bucket {bucket}: {err:#}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct ProbeStore {
        exists: bool,
        creates: AtomicUsize,
    }

    impl ProbeStore {
        fn new(exists: bool) -> Self {
            Self {
                exists,
                creates: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ObjectStore for ProbeStore {
        fn bucket_name(&self) -> &str {
            "test-bucket"
        }

        async fn head_bucket(&self) -> anyhow::Result<()> {
            if self.exists {
                Ok(())
            } else {
                Err(anyhow!("404 Not Found"))
            }
        }

        async fn create_bucket(&self) -> anyhow::Result<()> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn put_object(
            &self,
            _key: &str,
            _body: Vec<u8>,
            _content_type: &str,
        ) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn probe_failure_triggers_exactly_one_create() {
        let store = ProbeStore::new(false);
        ensure_bucket(&store).await;
        assert_eq!(store.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn existing_bucket_is_not_recreated() {
        let store = ProbeStore::new(true);
        ensure_bucket(&store).await;
        assert_eq!(store.creates.load(Ordering::SeqCst), 0);
    }
}
