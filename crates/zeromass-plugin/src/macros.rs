//! Convenience macros for plugin development.

/// Macro for building a `PluginInfo`.
///
/// # Example
/// ```rust,ignore
/// let info = plugin_info!(
///     id: "com.example.blog",
///     name: "Blog",
///     version: "1.0.0",
///     description: "Answers /blog pages",
///     author: "Dev"
/// );
/// ```
#[macro_export]
macro_rules! plugin_info {
    (
        id: $id:expr,
        name: $name:expr,
        version: $version:expr,
        description: $desc:expr,
        author: $author:expr
    ) => {
        $crate::prelude::PluginInfo {
            id: $id.to_string(),
            name: $name.to_string(),
            version: $version.to_string(),
            description: $desc.to_string(),
            author: $author.to_string(),
        }
    };
}
