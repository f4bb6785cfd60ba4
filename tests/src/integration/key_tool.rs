//! # Key Tool Boundary Tests
//!
//! Drives `generate-init-patch` end to end against a stand-in
//! `get_dev_key` program and checks that nothing is written on failure.

#[cfg(all(test, unix))]
mod tests {
    use std::path::{Path, PathBuf};

    use clap::Parser;
    use genesis_patch::parse;
    use genesis_util::{run, Args};

    /// Echoes `secret/label` back as the public key.
    const ECHO_TOOL: &str =
        r#"printf '[{"private_key":"wif","public_key":"%s/%s","address":"addr"}]' "$1" "$2""#;

    /// Script body run as `/bin/sh <script> <secret> <label>`.
    fn fake_tool(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("get_dev_key.sh");
        std::fs::write(&path, body).unwrap();
        path
    }

    fn args(script: &Path, out: &Path, extra: &[&str]) -> Args {
        let mut argv = vec![
            "generate-init-patch".to_string(),
            "--key-tool".to_string(),
            "/bin/sh".to_string(),
            "--key-tool-arg".to_string(),
            script.display().to_string(),
            "-o".to_string(),
            out.display().to_string(),
        ];
        argv.extend(extra.iter().map(|s| s.to_string()));
        Args::try_parse_from(argv).unwrap()
    }

    #[tokio::test]
    async fn test_cli_with_external_tool() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), ECHO_TOOL);
        let out = dir.path().join("patch.json");

        run(args(&tool, &out, &["-s", "S", "-n", "3", "-p"]))
            .await
            .unwrap();

        let doc = parse(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(doc.replace.initial_block_producers, 3);
        assert_eq!(doc.append.initial_accounts[2].name, "init2");
        assert_eq!(doc.append.initial_accounts[2].owner_key, "S/wit-owner-2");
        assert_eq!(doc.append.initial_accounts[2].active_key, "S/wit-active-2");
        assert_eq!(
            doc.replace.initial_validator_candidates[1].block_producer_key,
            "S/wit-block-signing-1"
        );
    }

    #[tokio::test]
    async fn test_concurrent_jobs_keep_index_order() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), ECHO_TOOL);
        let serial = dir.path().join("serial.json");
        let parallel = dir.path().join("parallel.json");

        run(args(&tool, &serial, &["-s", "S", "-n", "6"]))
            .await
            .unwrap();
        run(args(&tool, &parallel, &["-s", "S", "-n", "6", "-j", "4"]))
            .await
            .unwrap();

        assert_eq!(
            std::fs::read(&serial).unwrap(),
            std::fs::read(&parallel).unwrap()
        );
    }

    #[tokio::test]
    async fn test_failing_tool_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(
            dir.path(),
            r#"case "$2" in
  wit-owner-1) echo 'boom' >&2; exit 1 ;;
  *) printf '[{"public_key":"%s"}]' "$2" ;;
esac"#,
        );
        let out = dir.path().join("patch.json");

        let err = run(args(&tool, &out, &["-s", "S", "-n", "3"]))
            .await
            .unwrap_err();

        assert!(format!("{:#}", err).contains("wit-owner-1"));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_tool_without_public_key() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(dir.path(), r#"echo '[{"private_key":"wif"}]'"#);
        let out = dir.path().join("patch.json");

        let result = run(args(&tool, &out, &["-s", "S", "-n", "1"])).await;

        assert!(result.is_err());
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_tool_with_extra_fields() {
        let dir = tempfile::tempdir().unwrap();
        let tool = fake_tool(
            dir.path(),
            r#"printf '[{"public_key":"%s","address":5,"wif_private_key":null}]' "$2""#,
        );
        let out = dir.path().join("patch.json");

        run(args(&tool, &out, &["-s", "S", "-n", "1"]))
            .await
            .unwrap();

        let doc = parse(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(doc.append.initial_accounts[0].owner_key, "wit-owner-0");
    }
}
