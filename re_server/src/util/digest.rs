use crate::error::CacheError;
use once_cell::sync::Lazy;
use re_grpc_proto::build::bazel::remote::execution::v2::digest_function::Value as DigestFunction;
use re_grpc_proto::build::bazel::remote::execution::v2::Digest;
use regex::Regex;
use sha2::{Digest as _, Sha256};

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[0-9a-f]+$").expect("Failed to compile hash regex"));

pub fn compute_digest(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    let hash = hex::encode(hasher.finalize());

    Digest {
        hash,
        size_bytes: data.len() as i64,
    }
}

pub fn format_digest(digest: &Digest) -> String {
    format!("{}:{}", digest.hash, digest.size_bytes)
}

/// Length of the lowercase hex encoding produced by `function`.
pub fn hash_hex_len(function: DigestFunction) -> Option<usize> {
    match function {
        DigestFunction::Sha256 | DigestFunction::Sha256tree | DigestFunction::Blake3 => Some(64),
        DigestFunction::Sha1 => Some(40),
        DigestFunction::Md5 | DigestFunction::Murmur3 => Some(32),
        DigestFunction::Sha384 => Some(96),
        DigestFunction::Sha512 => Some(128),
        DigestFunction::Vso => Some(66),
        DigestFunction::Unknown => None,
    }
}

/// Checks that `digest` is well formed for `function` before it is used as a
/// store key. Nothing is partially accepted: any defect rejects the digest.
pub fn validate_digest(digest: &Digest, function: DigestFunction) -> Result<Digest, CacheError> {
    if digest.size_bytes < 0 {
        return Err(CacheError::InvalidArgument(format!(
            "Invalid (negative) digest size: {}",
            format_digest(digest)
        )));
    }

    if digest.hash.is_empty() {
        return Err(CacheError::InvalidArgument(
            "Digest hash must not be empty".to_string(),
        ));
    }

    let expected_len = hash_hex_len(function).ok_or_else(|| {
        CacheError::InvalidArgument(format!(
            "Unsupported digest function: {}",
            function.as_str_name()
        ))
    })?;

    if digest.hash.len() != expected_len {
        return Err(CacheError::InvalidArgument(format!(
            "Hash {} has length {}, expected {} for {}",
            digest.hash,
            digest.hash.len(),
            expected_len,
            function.as_str_name()
        )));
    }

    if !HEX_RE.is_match(&digest.hash) {
        return Err(CacheError::InvalidArgument(format!(
            "Hash {} is not lowercase hex",
            digest.hash
        )));
    }

    Ok(digest.clone())
}
