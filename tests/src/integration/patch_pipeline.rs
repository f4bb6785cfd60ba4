//! # Patch Pipeline Tests
//!
//! Exercises the full `index → keys → records → document → text` flow
//! through the public API only.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use genesis_patch::{
        parse, serialize, AssemblerConfig, DevKeyDeriver, GenesisPatchApi, PatchAssembler,
        PatchError, Secret, StaticKeyDeriver,
    };
    use proptest::prelude::*;
    use shared_crypto::{decode_public_key, DevKey};

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    const TWO_VALIDATOR_PATCH: &str = concat!(
        r#"{"append":{"initial_accounts":["#,
        r#"{"active_key":"active0","is_lifetime_member":true,"name":"init0","owner_key":"owner0"},"#,
        r#"{"active_key":"active1","is_lifetime_member":true,"name":"init1","owner_key":"owner1"}]},"#,
        r#""replace":{"initial_block_producers":2,"#,
        r#""initial_delegate_candidates":[{"owner_name":"init0"},{"owner_name":"init1"}],"#,
        r#""initial_validator_candidates":["#,
        r#"{"block_producer_key":"prod0","owner_name":"init0"},"#,
        r#"{"block_producer_key":"prod1","owner_name":"init1"}],"#,
        r#""initial_worker_candidates":[]}}"#
    );

    fn stub_assembler(n: u32) -> (Arc<StaticKeyDeriver>, PatchAssembler<StaticKeyDeriver>) {
        let deriver = Arc::new(StaticKeyDeriver::with_role_stubs(n));
        (deriver.clone(), PatchAssembler::new(deriver))
    }

    // =============================================================================
    // CONCRETE SCENARIOS
    // =============================================================================

    #[tokio::test]
    async fn test_two_validators_render_exact_document() {
        let (_, assembler) = stub_assembler(2);

        let text = assembler.render(Some("S".into()), 2, false).await.unwrap();

        assert_eq!(text, TWO_VALIDATOR_PATCH);
    }

    #[tokio::test]
    async fn test_zero_validators() {
        let (deriver, assembler) = stub_assembler(0);

        let text = assembler.render(Some("S".into()), 0, false).await.unwrap();

        assert_eq!(
            text,
            r#"{"append":{"initial_accounts":[]},"replace":{"initial_block_producers":0,"initial_delegate_candidates":[],"initial_validator_candidates":[],"initial_worker_candidates":[]}}"#
        );
        assert_eq!(deriver.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_secret_fails_before_derivation() {
        let (deriver, assembler) = stub_assembler(11);

        let result = assembler.render(None, 11, true).await;

        assert!(matches!(result, Err(PatchError::MissingSecret)));
        assert_eq!(deriver.calls(), 0);
    }

    #[tokio::test]
    async fn test_pretty_and_compact_are_equivalent() {
        let assembler = PatchAssembler::new(Arc::new(DevKeyDeriver::new()));
        let secret = Secret::new("S").unwrap();
        let doc = assembler.assemble(&secret, 5).await.unwrap();

        let compact = serialize(&doc, false).unwrap();
        let pretty = serialize(&doc, true).unwrap();

        assert_ne!(compact, pretty);
        assert_eq!(parse(&compact).unwrap(), parse(&pretty).unwrap());
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&compact).unwrap(),
            serde_json::from_str::<serde_json::Value>(&pretty).unwrap()
        );
    }

    #[tokio::test]
    async fn test_dev_keys_match_shared_crypto() {
        let assembler = PatchAssembler::new(Arc::new(DevKeyDeriver::new()));
        let secret = Secret::new("genesis").unwrap();

        let doc = assembler.assemble(&secret, 2).await.unwrap();

        let expected_owner = DevKey::derive("genesis", "wit-owner-1")
            .unwrap()
            .public_key_text("GPH");
        let expected_prod = DevKey::derive("genesis", "wit-block-signing-0")
            .unwrap()
            .public_key_text("GPH");

        assert_eq!(doc.append.initial_accounts[1].owner_key, expected_owner);
        assert_eq!(
            doc.replace.initial_validator_candidates[0].block_producer_key,
            expected_prod
        );
        for account in &doc.append.initial_accounts {
            assert!(decode_public_key("GPH", &account.active_key).is_ok());
        }
    }

    #[tokio::test]
    async fn test_secret_changes_every_key() {
        let assembler = PatchAssembler::new(Arc::new(DevKeyDeriver::new()));

        let a = assembler.render(Some("alpha".into()), 3, false).await.unwrap();
        let b = assembler.render(Some("beta".into()), 3, false).await.unwrap();

        let a = parse(&a).unwrap();
        let b = parse(&b).unwrap();
        for (x, y) in a.append.initial_accounts.iter().zip(&b.append.initial_accounts) {
            assert_eq!(x.name, y.name);
            assert_ne!(x.owner_key, y.owner_key);
        }
    }

    #[tokio::test]
    async fn test_default_count_is_eleven() {
        let assembler = PatchAssembler::with_config(
            Arc::new(DevKeyDeriver::new()),
            AssemblerConfig::default().with_max_concurrent_slots(4),
        );
        let secret = Secret::new("S").unwrap();

        let doc = assembler
            .assemble(&secret, genesis_patch::DEFAULT_VALIDATOR_COUNT)
            .await
            .unwrap();

        assert_eq!(doc.replace.initial_block_producers, 11);
        assert_eq!(doc.append.initial_accounts[10].name, "init10");
    }

    // =============================================================================
    // PROPERTIES
    // =============================================================================

    fn run<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_rendering_is_reproducible(n in 0u32..16, pretty in any::<bool>()) {
            let assembler = PatchAssembler::new(Arc::new(DevKeyDeriver::new()));

            let first = run(assembler.render(Some("S".into()), n, pretty)).unwrap();
            let second = run(assembler.render(Some("S".into()), n, pretty)).unwrap();

            prop_assert_eq!(&first, &second);

            let doc = parse(&first).unwrap();
            prop_assert!(doc.verify().is_ok());
            prop_assert_eq!(doc.append.initial_accounts.len(), n as usize);
            prop_assert_eq!(doc.replace.initial_validator_candidates.len(), n as usize);
            prop_assert_eq!(doc.replace.initial_delegate_candidates.len(), n as usize);
            prop_assert!(doc.replace.initial_worker_candidates.is_empty());
        }
    }
}
