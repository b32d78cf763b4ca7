// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The operator name, used as field manager on created objects
pub const OPERATOR_NAME: &str = "quartermaster";

/// Policy file resolution
pub mod policy_file {
    /// Default policy file path, relative to the working directory
    pub const DEFAULT_PATH: &str = "config.yaml";
    /// Environment variable overriding the policy file path
    pub const PATH_ENV: &str = "QUARTERMASTER_CONFIG";
}

/// Keys of the hard limits set on managed resource quotas
pub mod quota_keys {
    pub const PODS: &str = "pods";
    pub const REQUESTS_MEMORY: &str = "requests.memory";
    pub const LIMITS_MEMORY: &str = "limits.memory";
    pub const LIMITS_CPU: &str = "limits.cpu";
}
