/// Connection settings for the S3-compatible storage service.
///
/// Loaded once at startup and handed to
/// [`S3ObjectStorage::connect`](crate::S3ObjectStorage::connect); handlers
/// never read the environment.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Static access key id. When unset together with the secret, the SDK's
    /// default credential chain is used.
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Custom endpoint (MinIO, Ceph, ...). `None` targets AWS S3.
    pub endpoint_url: Option<String>,
    /// Signing region (default: `us-east-1`).
    pub region: String,
    /// Address buckets as `endpoint/bucket` instead of `bucket.endpoint`
    /// (default: `true`, which most S3-compatible services require).
    pub force_path_style: bool,
}

impl StorageConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default     |
    /// |------------------------|-------------|
    /// | `S3_ACCESS_KEY_ID`     | (none)      |
    /// | `S3_SECRET_ACCESS_KEY` | (none)      |
    /// | `S3_ENDPOINT_URL`      | (none)      |
    /// | `S3_REGION`            | `us-east-1` |
    /// | `S3_FORCE_PATH_STYLE`  | `true`      |
    pub fn from_env() -> Self {
        let non_empty = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let force_path_style: bool = std::env::var("S3_FORCE_PATH_STYLE")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("S3_FORCE_PATH_STYLE must be true or false");

        Self {
            access_key_id: non_empty("S3_ACCESS_KEY_ID"),
            secret_access_key: non_empty("S3_SECRET_ACCESS_KEY"),
            endpoint_url: non_empty("S3_ENDPOINT_URL"),
            region: non_empty("S3_REGION").unwrap_or_else(|| "us-east-1".into()),
            force_path_style,
        }
    }
}
