use anyhow::Result;
use prost::Message;
use re_grpc_proto::build::bazel::remote::execution::v2::{
    ActionResult, Digest, Directory, FileNode, GetActionResultRequest, OutputDirectory,
    OutputFile, Tree, UpdateActionResultRequest,
};
use re_integration_tests::ServerHarness;
use re_server::config::ActionCacheConfig;
use sha2::{Digest as Sha2Digest, Sha256};
use tonic::{Code, Request};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .try_init()
        .ok();
}

fn action_digest(name: &str) -> Digest {
    let hash = hex::encode(Sha256::digest(name.as_bytes()));
    Digest {
        hash,
        size_bytes: name.len() as i64,
    }
}

fn get_request(digest: &Digest) -> GetActionResultRequest {
    GetActionResultRequest {
        action_digest: Some(digest.clone()),
        ..Default::default()
    }
}

fn update_request(digest: &Digest, result: ActionResult) -> UpdateActionResultRequest {
    UpdateActionResultRequest {
        action_digest: Some(digest.clone()),
        action_result: Some(result),
        ..Default::default()
    }
}

fn inlined_output(path: &str, digest: &Digest, data: &[u8]) -> OutputFile {
    OutputFile {
        path: path.to_string(),
        digest: Some(digest.clone()),
        contents: data.to_vec(),
        ..Default::default()
    }
}

fn with_namespace<T>(message: T, namespace: &str) -> Request<T> {
    let mut request = Request::new(message);
    request
        .metadata_mut()
        .insert("x-cache-namespace", namespace.parse().unwrap());
    request
}

#[tokio::test]
async fn test_round_trip_stamps_worker() -> Result<()> {
    init_logging();

    let server = ServerHarness::start().await?;
    let mut client = server.client().await?;

    let output = server.put_blob("ANON", b"compiled output").await?;
    let action = action_digest("compile main.rs");

    let result = ActionResult {
        output_files: vec![OutputFile {
            is_executable: true,
            ..inlined_output("bin/main", &output, b"compiled output")
        }],
        stdout_raw: b"ok".to_vec(),
        ..Default::default()
    };

    let stored = client
        .update_action_result(update_request(&action, result.clone()))
        .await?
        .into_inner();
    assert_eq!(
        stored.execution_metadata.as_ref().map(|m| m.worker.as_str()),
        Some("harness-worker")
    );

    let fetched = client
        .get_action_result(get_request(&action))
        .await?
        .into_inner();
    assert_eq!(fetched, stored);
    assert_eq!(fetched.output_files, result.output_files);

    server.evict_blob("ANON", &output).await?;
    let status = client
        .get_action_result(get_request(&action))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    server.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_evicted_output_hides_result() -> Result<()> {
    init_logging();

    let server = ServerHarness::start().await?;
    let mut client = server.client().await?;

    let inlined = server.put_blob("ANON", b"short lived").await?;
    let referenced = server.put_blob("ANON", b"only referenced").await?;
    let action = action_digest("generate header");

    client
        .update_action_result(update_request(
            &action,
            ActionResult {
                output_files: vec![
                    inlined_output("gen/header.h", &inlined, b"short lived"),
                    OutputFile {
                        path: "gen/source.c".to_string(),
                        digest: Some(referenced.clone()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ))
        .await?;

    assert!(client.get_action_result(get_request(&action)).await.is_ok());

    // Outputs without inlined contents are not existence checked.
    server.evict_blob("ANON", &referenced).await?;
    assert!(client.get_action_result(get_request(&action)).await.is_ok());

    server.evict_blob("ANON", &inlined).await?;
    let status = client
        .get_action_result(get_request(&action))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    server.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_tree_with_missing_child_is_not_found() -> Result<()> {
    init_logging();

    let server = ServerHarness::start().await?;
    let mut client = server.client().await?;

    let present = server.put_blob("ANON", b"present file").await?;
    let missing = re_server::util::compute_digest(b"never uploaded");

    let tree = Tree {
        root: Some(Directory {
            files: vec![FileNode {
                name: "a.txt".to_string(),
                digest: Some(present),
                ..Default::default()
            }],
            ..Default::default()
        }),
        children: vec![Directory {
            files: vec![FileNode {
                name: "b.txt".to_string(),
                digest: Some(missing.clone()),
                ..Default::default()
            }],
            ..Default::default()
        }],
    };
    let tree_digest = server.put_blob("ANON", &tree.encode_to_vec()).await?;
    let action = action_digest("package dir");

    client
        .update_action_result(update_request(
            &action,
            ActionResult {
                output_directories: vec![OutputDirectory {
                    path: "out".to_string(),
                    tree_digest: Some(tree_digest),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ))
        .await?;

    let status = client
        .get_action_result(get_request(&action))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    server.put_blob("ANON", b"never uploaded").await?;
    assert!(client.get_action_result(get_request(&action)).await.is_ok());

    server.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_invalid_requests() -> Result<()> {
    init_logging();

    let server = ServerHarness::start().await?;
    let mut client = server.client().await?;

    let status = client
        .get_action_result(GetActionResultRequest::default())
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let malformed = Digest {
        hash: "not-a-hash".to_string(),
        size_bytes: 1,
    };
    let status = client
        .get_action_result(get_request(&malformed))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = client
        .get_action_result(get_request(&action_digest("never stored")))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let status = client
        .get_action_result(with_namespace(
            get_request(&action_digest("bad namespace")),
            "../escape",
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    server.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_namespaces_are_isolated() -> Result<()> {
    init_logging();

    let server = ServerHarness::start().await?;
    let mut client = server.client().await?;

    let output = server.put_blob("team-a", b"team a output").await?;
    let action = action_digest("shared action");

    client
        .update_action_result(with_namespace(
            update_request(
                &action,
                ActionResult {
                    output_files: vec![inlined_output("out", &output, b"team a output")],
                    ..Default::default()
                },
            ),
            "team-a",
        ))
        .await?;

    assert!(client
        .get_action_result(with_namespace(get_request(&action), "team-a"))
        .await
        .is_ok());

    let status = client
        .get_action_result(with_namespace(get_request(&action), "team-b"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    let status = client
        .get_action_result(get_request(&action))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    // A team-a result is only valid against team-a's blobs.
    let anon_only = server.put_blob("ANON", b"anonymous output").await?;
    let other_action = action_digest("cross namespace action");
    client
        .update_action_result(with_namespace(
            update_request(
                &other_action,
                ActionResult {
                    output_files: vec![inlined_output("out", &anon_only, b"anonymous output")],
                    ..Default::default()
                },
            ),
            "team-a",
        ))
        .await?;

    let status = client
        .get_action_result(with_namespace(get_request(&other_action), "team-a"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);

    server.shutdown().await?;
    Ok(())
}

#[tokio::test]
async fn test_read_only_server_rejects_updates() -> Result<()> {
    init_logging();

    let server = ServerHarness::start_with(ActionCacheConfig {
        update_enabled: false,
        ..Default::default()
    })
    .await?;
    let mut client = server.client().await?;

    let status = client
        .update_action_result(update_request(
            &action_digest("read only"),
            ActionResult::default(),
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::PermissionDenied);

    server.shutdown().await?;
    Ok(())
}
