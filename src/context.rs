//! Request-scoped link resolution context.

use std::collections::HashMap;

/// Host and routing information for the request being rendered.
///
/// The router prefix is normalized to either an empty string or a path
/// starting with `/` and without a trailing slash.
///
/// No request protocol is tracked: absolute URLs on a public host are always
/// built with `https`, even when the admin request arrived over `http`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkContext {
    host: String,
    router_prefix: String,
    public_hosts: HashMap<String, String>,
}

impl LinkContext {
    /// Creates context for a request served from `host`.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into().to_ascii_lowercase(),
            router_prefix: String::new(),
            public_hosts: HashMap::new(),
        }
    }

    /// Mounts all routes below `prefix` (e.g. `/government`).
    pub fn with_router_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        let trimmed = prefix.as_ref().trim_matches('/');
        self.router_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    /// Maps an admin host to the public host serving its published content.
    pub fn with_public_host(
        mut self,
        admin_host: impl Into<String>,
        public_host: impl Into<String>,
    ) -> Self {
        self.public_hosts.insert(
            admin_host.into().to_ascii_lowercase(),
            public_host.into(),
        );
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn router_prefix(&self) -> &str {
        &self.router_prefix
    }

    /// Returns the public host configured for `host`, if any.
    pub fn public_host_for(&self, host: &str) -> Option<&str> {
        self.public_hosts
            .get(&host.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Path segments identifying the admin interface root.
    ///
    /// Router prefix segments followed by `admin`.
    pub fn admin_root_segments(&self) -> Vec<&str> {
        self.router_prefix
            .split('/')
            .filter(|s| !s.is_empty())
            .chain(std::iter::once("admin"))
            .collect()
    }
}
