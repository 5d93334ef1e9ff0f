//! Global Constants
//!
//! Conventional file names, path fragments, and reflector settings in one
//! place.

/// Conventional workspace and project paths
pub mod paths {
    /// Workspace configuration at the workspace root
    pub const WORKSPACE_CONFIG: &str = "angular.json";

    /// Canonical public-API file name under a project's source root
    pub const PUBLIC_API_FILE: &str = "public-api.ts";

    /// Packaging manifest under a project root (carries `dest`)
    pub const NG_PACKAGE_MANIFEST: &str = "ng-package.json";

    /// Manifest carrying the published package name
    pub const PACKAGE_MANIFEST: &str = "package.json";

    /// Directory of library projects under the workspace root
    pub const PROJECTS_DIR: &str = "projects";

    /// Usage-example snippets under a project root
    pub const CODE_EXAMPLES_DIR: &str = "documentation/code-examples";

    /// Persisted artifact name under the packaging destination
    pub const DOCUMENTATION_FILE: &str = "documentation.json";
}

/// Entry-point discovery heuristics
pub mod entry_points {
    /// File suffixes treated as potential supplementary entry points
    pub const SUFFIXES: &[&str] = &[".component.ts", ".directive.ts"];

    /// Directory names whose contents never become entry points
    pub const EXCLUDED_DIRS: &[&str] = &["fixtures", "testing"];
}

/// Reflector invocation defaults
pub mod reflector {
    /// Default TypeDoc binary name, resolved via PATH
    pub const DEFAULT_BIN: &str = "typedoc";

    /// Globs excluded from analysis
    pub const EXCLUDE_GLOBS: &[&str] = &[
        "**/node_modules/**",
        "**/fixtures/**",
        "**/testing/**",
        "**/*.spec.ts",
    ];

    /// Fixed compiler profile
    pub const MODULE: &str = "ES2020";
    pub const MODULE_RESOLUTION: &str = "node";
    pub const TARGET: &str = "ES2017";
}

/// Anchor-ID slugification
pub mod slug {
    /// Characters stripped from slug input before dash collapsing
    pub const STRIPPED_CHARS: &str = "_~`@!#$%^&*()[]{};:'/\\<>,.?=+|\"";
}
