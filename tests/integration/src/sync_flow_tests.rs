//! End-to-end sync flows over real temporary workspaces.
//!
//! These tests drive the full pipeline through [`refsync_core::run`] with
//! a static provider, asserting on the exact bytes written to disk and on
//! the reports returned for each mode.

use pretty_assertions::assert_eq;
use refsync_core::{Mode, run};
use refsync_test_utils::TestWorkspace;

const EMPTY: &str = "{}\n";

fn two_package_workspace() -> TestWorkspace {
    let mut ws = TestWorkspace::new();
    ws.add_package("a", "packages/a", &[]);
    ws.add_package("b", "packages/b", &["a"]);
    ws.write_tsconfig("packages/a", EMPTY);
    ws.write_tsconfig("packages/b", EMPTY);
    ws.write_root_tsconfig(EMPTY);
    ws
}

#[tokio::test]
async fn test_check_write_check_lifecycle() {
    let ws = two_package_workspace();
    let root = ws.normalized_root();
    let provider = ws.provider();

    let report = run(&root, Mode::Check, &provider).await.unwrap();
    assert_eq!(report.exit_code, 1);
    assert!(!report.in_sync());
    let message = report.message.unwrap();
    assert!(message.contains("not in sync"));
    assert!(message.contains("refsync write"));
    assert_eq!(ws.read("packages/a/tsconfig.json"), EMPTY);
    assert_eq!(ws.read("packages/b/tsconfig.json"), EMPTY);
    assert_eq!(ws.read("tsconfig.json"), EMPTY);

    let report = run(&root, Mode::Write, &provider).await.unwrap();
    assert_eq!(report.exit_code, 0);
    assert_eq!(
        ws.read("packages/a/tsconfig.json"),
        "{\n  \"references\": []\n}\n"
    );
    assert_eq!(
        ws.read("packages/b/tsconfig.json"),
        "{\n  \"references\": [\n    {\n      \"path\": \"../a/tsconfig.json\"\n    }\n  ]\n}\n"
    );
    assert_eq!(
        ws.read("tsconfig.json"),
        "{\n  \"files\": [],\n  \"references\": [\n    {\n      \"path\": \"packages/a/tsconfig.json\"\n    },\n    {\n      \"path\": \"packages/b/tsconfig.json\"\n    }\n  ]\n}\n"
    );

    let report = run(&root, Mode::Check, &provider).await.unwrap();
    assert_eq!(report.exit_code, 0);
    assert!(report.in_sync());
    assert!(report.drifted.is_empty());
    assert!(report.message.is_none());

    let before = ws.read("packages/b/tsconfig.json");
    let report = run(&root, Mode::Write, &provider).await.unwrap();
    assert!(report.drifted.is_empty());
    assert_eq!(
        report.message.as_deref(),
        Some("Project references are in sync with dependencies.")
    );
    assert_eq!(ws.read("packages/b/tsconfig.json"), before);
}

#[tokio::test]
async fn test_scoped_packages_with_deep_locations() {
    let mut ws = TestWorkspace::new();
    ws.add_package("@acme/core", "libs/core", &[]);
    ws.add_package("@acme/web", "apps/tools/web", &["@acme/core"]);
    ws.write_tsconfig("libs/core", EMPTY);
    ws.write_tsconfig("apps/tools/web", EMPTY);
    ws.write_root_tsconfig(EMPTY);

    run(&ws.normalized_root(), Mode::Write, &ws.provider())
        .await
        .unwrap();

    assert_eq!(
        ws.read("apps/tools/web/tsconfig.json"),
        "{\n  \"references\": [\n    {\n      \"path\": \"../../../libs/core/tsconfig.json\"\n    }\n  ]\n}\n"
    );
    // Root references follow the graph's document order, not path order.
    assert_eq!(
        ws.read("tsconfig.json"),
        "{\n  \"files\": [],\n  \"references\": [\n    {\n      \"path\": \"libs/core/tsconfig.json\"\n    },\n    {\n      \"path\": \"apps/tools/web/tsconfig.json\"\n    }\n  ]\n}\n"
    );
}

#[tokio::test]
async fn test_nearest_prettier_config_wins() {
    let ws = two_package_workspace();
    ws.write_file(".prettierrc", "useTabs: true\n");
    ws.write_file("packages/b/.prettierrc.json", "{\n  \"tabWidth\": 4\n}\n");

    run(&ws.normalized_root(), Mode::Write, &ws.provider())
        .await
        .unwrap();

    // Package a and the root fall back to the workspace-level style.
    assert_eq!(
        ws.read("packages/a/tsconfig.json"),
        "{\n\t\"references\": []\n}\n"
    );
    assert_eq!(
        ws.read("tsconfig.json"),
        "{\n\t\"files\": [],\n\t\"references\": [\n\t\t{\n\t\t\t\"path\": \"packages/a/tsconfig.json\"\n\t\t},\n\t\t{\n\t\t\t\"path\": \"packages/b/tsconfig.json\"\n\t\t}\n\t]\n}\n"
    );
    // Package b has its own style file, which shadows the root one.
    assert_eq!(
        ws.read("packages/b/tsconfig.json"),
        "{\n    \"references\": [\n        {\n            \"path\": \"../a/tsconfig.json\"\n        }\n    ]\n}\n"
    );
}

#[tokio::test]
async fn test_root_config_keeps_unmanaged_fields() {
    let mut ws = TestWorkspace::new();
    ws.add_package("a", "packages/a", &[]);
    ws.write_tsconfig("packages/a", EMPTY);
    ws.write_root_tsconfig(
        "{\n  \"compilerOptions\": {\n    \"composite\": true,\n    \"strict\": true\n  },\n  \"exclude\": [\"node_modules\"],\n  \"files\": [\"legacy.ts\"],\n  \"references\": [{\"path\": \"stale\"}]\n}\n",
    );

    run(&ws.normalized_root(), Mode::Write, &ws.provider())
        .await
        .unwrap();

    let doc: serde_json::Value = serde_json::from_str(&ws.read("tsconfig.json")).unwrap();
    assert_eq!(doc["compilerOptions"]["composite"], serde_json::json!(true));
    assert_eq!(doc["compilerOptions"]["strict"], serde_json::json!(true));
    assert_eq!(doc["exclude"], serde_json::json!(["node_modules"]));
    assert_eq!(doc["files"], serde_json::json!([]));
    assert_eq!(
        doc["references"],
        serde_json::json!([{ "path": "packages/a/tsconfig.json" }])
    );
}

#[tokio::test]
async fn test_partially_typescript_workspace() {
    let mut ws = TestWorkspace::new();
    ws.add_package("a", "packages/a", &[]);
    ws.add_package("docs", "packages/docs", &[]);
    ws.add_package("b", "packages/b", &["a", "docs"]);
    ws.write_tsconfig("packages/a", EMPTY);
    ws.write_tsconfig("packages/b", EMPTY);
    ws.write_root_tsconfig(EMPTY);

    run(&ws.normalized_root(), Mode::Write, &ws.provider())
        .await
        .unwrap();

    // The docs package has no tsconfig, so it is neither referenced nor
    // given one.
    assert_eq!(
        ws.read("packages/b/tsconfig.json"),
        "{\n  \"references\": [\n    {\n      \"path\": \"../a/tsconfig.json\"\n    }\n  ]\n}\n"
    );
    assert_eq!(
        ws.read("tsconfig.json"),
        "{\n  \"files\": [],\n  \"references\": [\n    {\n      \"path\": \"packages/a/tsconfig.json\"\n    },\n    {\n      \"path\": \"packages/b/tsconfig.json\"\n    }\n  ]\n}\n"
    );
    assert!(!ws.root().join("packages/docs/tsconfig.json").exists());
}

#[tokio::test]
async fn test_adding_a_config_creates_the_reference() {
    let mut ws = TestWorkspace::new();
    ws.add_package("a", "packages/a", &[]);
    ws.add_package("tools", "packages/tools", &[]);
    ws.add_package("b", "packages/b", &["a", "tools"]);
    ws.write_tsconfig("packages/a", EMPTY);
    ws.write_tsconfig("packages/b", EMPTY);
    ws.write_root_tsconfig(EMPTY);

    run(&ws.normalized_root(), Mode::Write, &ws.provider())
        .await
        .unwrap();
    assert_eq!(
        ws.read("packages/b/tsconfig.json"),
        "{\n  \"references\": [\n    {\n      \"path\": \"../a/tsconfig.json\"\n    }\n  ]\n}\n"
    );

    // The tools package adopts TypeScript; the next run picks it up.
    ws.write_tsconfig("packages/tools", EMPTY);
    run(&ws.normalized_root(), Mode::Write, &ws.provider())
        .await
        .unwrap();

    assert_eq!(
        ws.read("packages/b/tsconfig.json"),
        "{\n  \"references\": [\n    {\n      \"path\": \"../a/tsconfig.json\"\n    },\n    {\n      \"path\": \"../tools/tsconfig.json\"\n    }\n  ]\n}\n"
    );
    assert_eq!(
        ws.read("tsconfig.json"),
        "{\n  \"files\": [],\n  \"references\": [\n    {\n      \"path\": \"packages/a/tsconfig.json\"\n    },\n    {\n      \"path\": \"packages/tools/tsconfig.json\"\n    },\n    {\n      \"path\": \"packages/b/tsconfig.json\"\n    }\n  ]\n}\n"
    );
}

#[tokio::test]
async fn test_write_report_names_rewritten_files() {
    let ws = two_package_workspace();

    let report = run(&ws.normalized_root(), Mode::Write, &ws.provider())
        .await
        .unwrap();

    let files: Vec<&str> = report.drifted.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(
        files,
        [
            "packages/a/tsconfig.json",
            "packages/b/tsconfig.json",
            "tsconfig.json"
        ]
    );
    assert!(report.drifted.iter().all(|e| e.diff.is_none()));
    assert_eq!(
        report.message.as_deref(),
        Some("Project references were synced with dependencies.")
    );
    assert_eq!(report.exit_code, 0);
}

#[tokio::test]
async fn test_check_reports_diffs_without_touching_disk() {
    let ws = two_package_workspace();

    let report = run(&ws.normalized_root(), Mode::Check, &ws.provider())
        .await
        .unwrap();

    let entry = report
        .drifted
        .iter()
        .find(|e| e.file == "packages/b/tsconfig.json")
        .unwrap();
    let diff = entry.diff.as_deref().unwrap();
    assert!(diff.starts_with("--- current\n+++ expected\n"));
    assert!(diff.contains("../a/tsconfig.json"));
    assert_eq!(ws.read("packages/b/tsconfig.json"), EMPTY);
}
