//! Embedded champion catalog
//!
//! Records compiled into the binary at build time.

// Include generated records from build script
include!(concat!(env!("OUT_DIR"), "/champions.rs"));
