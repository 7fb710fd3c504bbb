use std::collections::HashSet;

use canteen_api::services::token_service::generate_token_number;

#[test]
fn token_numbers_are_well_formed() {
    for _ in 0..100 {
        let token = generate_token_number();
        assert_eq!(token.len(), 10, "unexpected length for {token}");
        assert!(token.starts_with("TK"), "missing prefix on {token}");
        assert!(
            token[2..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)),
            "non-hex suffix in {token}"
        );
    }
}

// 32 bits of randomness per token; a thousand draws should never collide.
#[test]
fn sequential_issuances_do_not_collide() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let token = generate_token_number();
        assert!(seen.insert(token.clone()), "duplicate token {token}");
    }
}
