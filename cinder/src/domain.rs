pub mod response {

    #[derive(Clone, Debug)]
    pub struct PutResponse {
        pub created: bool,
        pub message: String,
    }

    impl PutResponse {
        pub fn new(created: bool, message: impl Into<String>) -> Self {
            Self {
                created,
                message: message.into(),
            }
        }
    }

    #[derive(Clone, Debug)]
    pub struct GetResponse<V> {
        pub found: bool,
        pub message: V,
    }

    impl<V> GetResponse<V> {
        pub fn new(found: bool, message: V) -> Self {
            Self { found, message }
        }
    }

    #[derive(Clone, Debug)]
    pub struct ExistsResponse {
        pub exists: bool,
    }

    impl ExistsResponse {
        pub fn new(exists: bool) -> Self {
            Self { exists }
        }
    }

    #[derive(Clone, Debug)]
    pub struct DeleteResponse {
        pub deleted: bool,
    }

    impl DeleteResponse {
        pub fn new(deleted: bool) -> Self {
            Self { deleted }
        }
    }
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub name: String,                 // unique cache name
    pub max_entries: Option<u64>,     // entry budget (None = unbounded)
    pub default_ttl_ms: Option<u64>,  // None = entries never expire
    pub max_value_bytes: Option<u64>, // guardrails
}

impl CacheConfig {
    pub fn new(
        name: impl Into<String>,
        max_entries: Option<u64>,
        default_ttl_ms: Option<u64>,
        max_value_bytes: Option<u64>,
    ) -> Self {
        Self {
            name: name.into(),
            max_entries,
            default_ttl_ms,
            max_value_bytes,
        }
    }
}
