//! Remote Execution API types consumed by the action cache server.
//!
//! `build.bazel.remote.execution.v2.rs` is checked in rather than produced by
//! a `build.rs`, so building this crate needs no `protoc`. It holds the
//! subset of `build/bazel/remote/execution/v2/remote_execution.proto` that
//! the action cache reads and writes, in the shape prost-build and
//! tonic-build emit:
//!
//! - `Digest` and `DigestFunction`
//! - `ActionResult`, `OutputFile`, `OutputDirectory`, `OutputSymlink`,
//!   `ExecutedActionMetadata`
//! - `Tree`, `Directory`, `FileNode`, `DirectoryNode`, `SymlinkNode`
//! - `GetActionResultRequest`, `UpdateActionResultRequest`,
//!   `ResultsCachePolicy`
//! - the `ActionCache` client and server stubs

pub mod build {
    pub mod bazel {
        pub mod remote {
            pub mod execution {
                pub mod v2 {
                    include!("build.bazel.remote.execution.v2.rs");
                }
            }
        }
    }
}
