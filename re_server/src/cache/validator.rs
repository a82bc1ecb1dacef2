use super::tree::{decode_tree, tree_directories};
use crate::auth::RequestContext;
use crate::error::CacheError;
use crate::storage::DynDigestCache;
use crate::util::{format_digest, validate_digest};
use re_grpc_proto::build::bazel::remote::execution::v2::digest_function::Value as DigestFunction;
use re_grpc_proto::build::bazel::remote::execution::v2::{ActionResult, Digest, Directory};
use std::collections::HashSet;

/// Decides whether every blob an `ActionResult` references is still in the CAS.
///
/// Outputs are checked with batched `contains_multi` calls; tree blobs of
/// output directories are fetched one at a time. The first failure wins.
/// A store that cannot answer reads as a missing blob; only an incomplete
/// batch answer is `Internal`.
pub struct OutputValidator {
    cas: DynDigestCache,
}

impl OutputValidator {
    pub fn new(cas: DynDigestCache) -> Self {
        Self { cas }
    }

    /// Checks `digests` with a single batched lookup. Empty blobs
    /// (`size_bytes == 0`) are always present and never looked up.
    pub async fn check_files_exist(
        &self,
        ctx: &RequestContext,
        digests: &[Digest],
        function: DigestFunction,
    ) -> Result<(), CacheError> {
        let mut seen = HashSet::new();
        let digests: Vec<Digest> = digests
            .iter()
            .filter(|d| d.size_bytes > 0)
            .filter(|d| seen.insert((*d).clone()))
            .cloned()
            .collect();

        if digests.is_empty() {
            return Ok(());
        }

        for digest in &digests {
            validate_digest(digest, function)?;
        }

        let found = self
            .cas
            .contains_multi(ctx, &digests)
            .await
            .map_err(|e| {
                CacheError::NotFound(format!(
                    "Failed to check {} blobs in cache: {:#}",
                    digests.len(),
                    e
                ))
            })?;

        for digest in &digests {
            match found.get(digest) {
                None => {
                    return Err(CacheError::Internal(format!(
                        "Inconsistent result from contains_multi (missing {})",
                        format_digest(digest)
                    )));
                }
                Some(false) => {
                    return Err(CacheError::NotFound(format!(
                        "ActionResult output file: '{}' not found in cache",
                        format_digest(digest)
                    )));
                }
                Some(true) => {}
            }
        }

        Ok(())
    }

    pub async fn check_directory_exists(
        &self,
        ctx: &RequestContext,
        directory: &Directory,
        function: DigestFunction,
    ) -> Result<(), CacheError> {
        // Files without a digest are placeholders.
        let digests: Vec<Digest> = directory
            .files
            .iter()
            .filter_map(|file| file.digest.clone())
            .collect();

        self.check_files_exist(ctx, &digests, function).await
    }

    pub async fn validate_action_result(
        &self,
        ctx: &RequestContext,
        result: &ActionResult,
        function: DigestFunction,
    ) -> Result<(), CacheError> {
        let output_file_digests: Vec<Digest> = result
            .output_files
            .iter()
            .filter(|file| !file.contents.is_empty())
            .filter_map(|file| file.digest.clone())
            .filter(|digest| digest.size_bytes > 0)
            .collect();

        self.check_files_exist(ctx, &output_file_digests, function)
            .await?;

        for output_dir in &result.output_directories {
            let tree_digest = output_dir.tree_digest.as_ref().ok_or_else(|| {
                CacheError::NotFound(format!(
                    "Output directory '{}' has no tree digest",
                    output_dir.path
                ))
            })?;

            if tree_digest.size_bytes == 0 {
                continue;
            }
            validate_digest(tree_digest, function)?;

            let blob = self
                .cas
                .get(ctx, tree_digest)
                .await
                .map_err(|e| {
                    CacheError::NotFound(format!(
                        "Failed to fetch tree {}: {:#}",
                        format_digest(tree_digest),
                        e
                    ))
                })?
                .ok_or_else(|| {
                    CacheError::NotFound(format!(
                        "Tree ({}) for output directory '{}' not found in cache",
                        format_digest(tree_digest),
                        output_dir.path
                    ))
                })?;

            let tree = decode_tree(&blob).map_err(|e| {
                CacheError::NotFound(format!(
                    "Tree ({}) for output directory '{}' is unreadable: {:#}",
                    format_digest(tree_digest),
                    output_dir.path,
                    e
                ))
            })?;

            for directory in tree_directories(&tree) {
                self.check_directory_exists(ctx, directory, function)
                    .await?;
            }
        }

        Ok(())
    }
}
