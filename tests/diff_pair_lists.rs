mod helper;

use pair_list::{
    DiffConfig, DiffError, Differ, Extensions, Pair, PairField, Token, TokenField, VersionUpgrade,
    diff_pair_lists,
};
use serde_json::json;

use helper::{
    init_tracing, pair_a, pair_of, token_a, token_a_changed_name_decimals, token_a_changed_tags,
    token_b,
};

fn token_c() -> Token {
    Token {
        chain_id: 137,
        address: "0x0c".to_string(),
        name: "token c".to_string(),
        decimals: 6,
        symbol: "USDC".to_string(),
        logo_uri: None,
        tags: None,
        extensions: None,
        price_oracle_address: Some("0xfeed".to_string()),
    }
}

#[test]
fn diffing_a_list_against_itself_is_empty() {
    init_tracing();
    let tokens = vec![token_a(), token_b(), token_c()];
    let pairs = vec![pair_a(), pair_of(token_a(), token_b())];

    let diff = diff_pair_lists(&pairs, &pairs, &tokens, &tokens);

    assert!(diff.is_empty());
    assert_eq!(diff.min_version_bump(), VersionUpgrade::None);
}

#[test]
fn diffing_a_list_with_extensions_against_itself_is_empty() {
    let extensions = Extensions::from([("coingeckoId".to_string(), json!("abc"))]);
    let token = Token {
        extensions: Some(extensions.clone()),
        ..token_a()
    };
    let pair = Pair {
        extensions: Some(extensions),
        ..pair_of(token.clone(), token_b())
    };
    let tokens = vec![token, token_b()];
    let pairs = vec![pair];

    let diff = diff_pair_lists(&pairs, &pairs, &tokens, &tokens);

    assert!(diff.is_empty());
    assert_eq!(diff.min_version_bump(), VersionUpgrade::None);
}

#[test]
fn tag_change_is_reported_under_chain_and_address() {
    let diff = diff_pair_lists(
        &[pair_a()],
        &[pair_a()],
        &[token_a()],
        &[token_a_changed_tags()],
    );

    assert_eq!(
        serde_json::to_value(diff.changed_tokens()).unwrap(),
        json!({ "1": { "0x0a": ["tags"] } })
    );
    assert!(diff.changed_pairs().is_empty());
    assert_eq!(diff.min_version_bump(), VersionUpgrade::Patch);
}

#[test]
fn changed_list_holds_exactly_the_differing_attributes() {
    let diff = diff_pair_lists(&[], &[], &[token_a()], &[token_a_changed_name_decimals()]);

    assert_eq!(
        diff.changed_tokens()[&1u64]["0x0a"],
        vec![TokenField::Name, TokenField::Decimals]
    );
}

#[test]
fn removed_token_is_returned_as_full_record() {
    let diff = diff_pair_lists(&[pair_a()], &[pair_a()], &[token_a()], &[]);

    assert_eq!(diff.removed_tokens(), &[token_a()]);
    assert!(diff.added_tokens().is_empty());
    assert_eq!(diff.min_version_bump(), VersionUpgrade::Major);
}

#[test]
fn added_tokens_keep_updated_list_order() {
    let diff = diff_pair_lists(&[], &[], &[token_b()], &[token_c(), token_b(), token_a()]);

    assert_eq!(diff.added_tokens(), &[token_c(), token_a()]);
    assert_eq!(diff.min_version_bump(), VersionUpgrade::Minor);
}

#[test]
fn removed_pairs_keep_base_list_order() {
    let ab = pair_of(token_a(), token_b());
    let ba = pair_of(token_b(), token_a());
    let diff = diff_pair_lists(&[ba.clone(), pair_a(), ab.clone()], &[pair_a()], &[], &[]);

    assert_eq!(diff.removed_pairs(), &[ba, ab]);
}

#[test]
fn pair_changes_exclude_identity_and_oracle() {
    let base = pair_of(token_a(), token_b());
    let updated = Pair {
        base: token_a_changed_name_decimals(),
        quote: token_b(),
        base_adapter_type: "Chainlink".to_string(),
        price_oracle_address: "0xnew".to_string(),
        tags: Some(vec!["stable".to_string()]),
        ..base.clone()
    };

    let diff = diff_pair_lists(&[base], &[updated], &[], &[]);

    assert_eq!(
        diff.changed_pairs()["0x0a"]["0x0b"],
        vec![PairField::BaseAdapterType, PairField::Tags]
    );
}

#[test]
fn extensions_on_both_sides_are_always_changed() {
    let extensions = Extensions::from([(
        "bridgeInfo".to_string(),
        json!({ "10": { "tokenAddress": "0x0f" } }),
    )]);
    let token = Token {
        extensions: Some(extensions),
        ..token_a()
    };

    let diff = diff_pair_lists(&[], &[], &[token.clone()], &[token]);

    assert_eq!(
        diff.changed_tokens()[&1u64]["0x0a"],
        vec![TokenField::Extensions]
    );
    assert_eq!(diff.min_version_bump(), VersionUpgrade::Patch);
}

#[test]
fn removal_and_addition_together_are_major() {
    let diff = diff_pair_lists(&[], &[], &[token_b()], &[token_a()]);

    assert_eq!(diff.added_tokens(), &[token_a()]);
    assert_eq!(diff.removed_tokens(), &[token_b()]);
    assert_eq!(diff.min_version_bump(), VersionUpgrade::Major);
}

#[test]
fn differ_rejects_duplicate_keys_when_configured() {
    init_tracing();
    let config: DiffConfig = serde_json::from_value(json!({ "duplicateKeys": "reject" })).unwrap();

    let result = Differ::new(config).diff(&[], &[], &[token_a(), token_a_changed_tags()], &[]);

    match result {
        Err(DiffError::DuplicateToken {
            list,
            chain_id,
            address,
        }) => {
            assert_eq!(list, "base");
            assert_eq!(chain_id, 1);
            assert_eq!(address, "0x0a");
        }
        other => panic!("expected duplicate token error, got {other:?}"),
    }
}

#[test]
fn differ_shadows_duplicate_keys_by_default() {
    init_tracing();

    let diff = Differ::default()
        .diff(
            &[],
            &[],
            &[token_a(), token_a_changed_tags()],
            &[token_a_changed_tags()],
        )
        .unwrap();

    assert!(diff.is_empty());
}
