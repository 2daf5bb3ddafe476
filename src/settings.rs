//! Fixed file locations for the one-shot conversion run.
//!
//! Both paths are resolved relative to the working directory; the tool
//! takes no command-line flags and reads no environment variables.

/// Subscription input: a link list or a single base64 blob.
pub const INPUT_FILE: &str = "links.txt";

/// Generated Clash configuration.
pub const OUTPUT_FILE: &str = "config.yaml";
