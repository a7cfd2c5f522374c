//! Shared defaults for the CLI and config layer.

/// Byte budget applied to every extracted path, the common
/// filename-length ceiling across filesystems.
pub const MAX_NAME_BYTES: usize = 255;

/// Replacement string substituted for forbidden path characters.
pub const DEFAULT_REPLACEMENT: &str = "_";

/// Directory extracted sources are written into.
pub const DEFAULT_OUT_DIR: &str = "blob";

/// Optional config file read from the working directory.
pub const CONFIG_FILE: &str = "unmap.toml";
