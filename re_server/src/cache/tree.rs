use anyhow::{Context, Result};
use prost::Message;
use re_grpc_proto::build::bazel::remote::execution::v2::{Directory, Tree};

pub fn decode_tree(data: &[u8]) -> Result<Tree> {
    Tree::decode(data).context("Failed to decode Tree proto")
}

/// The directories of a tree in validation order: the root first, then the
/// children as listed. A tree is flat, so no further traversal is needed.
pub fn tree_directories(tree: &Tree) -> impl Iterator<Item = &Directory> {
    tree.root.iter().chain(tree.children.iter())
}
