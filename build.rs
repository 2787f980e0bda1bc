//! Build script for the notifications client.
//!
//! Currently a no-op placeholder. The notifications service wire types are
//! implemented directly in Rust (see src/api/proto.rs) rather than generated
//! from protobuf definitions.
//!
//! This approach was chosen because:
//! - It avoids proto file dependencies and build-time codegen complexity
//! - It allows for client-specific type customizations
//! - The notifications API surface is a small, stable set of five unary calls
//!
//! If proto-based codegen is needed in the future, tonic-build can be
//! configured here to compile proto files from a `proto/` directory.

fn main() {
    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
