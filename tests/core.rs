use num_bigint::BigUint;
use rate_compare::core::errors::SwapError;
use rate_compare::core::trade::best_trade_exact_in;
use rate_compare::core::types::{Pool, SearchOptions, SwapFee, Token, TokenAmount};
use std::collections::HashSet;

fn token(address: &str, decimals: u32) -> Token {
    Token::new(56, address, decimals)
}

fn amount(token: &Token, raw: u128) -> TokenAmount {
    TokenAmount {
        token: token.clone(),
        raw: BigUint::from(raw),
    }
}

fn pool(a: TokenAmount, b: TokenAmount) -> Pool {
    Pool::new(a, b).unwrap()
}

fn options(fee_numerator: u64, max_hops: usize, max_results: usize) -> SearchOptions {
    SearchOptions {
        fee: SwapFee {
            numerator: fee_numerator,
            denominator: 1000,
        },
        max_hops,
        max_results,
    }
}

#[test]
fn from_raw_validates_integer_strings() {
    let t = token("0xaa", 6);
    assert!(TokenAmount::from_raw(t.clone(), "0").is_ok());
    assert!(TokenAmount::from_raw(t.clone(), "123456789012345678901234567890").is_ok());
    for bad in ["", "-5", "+5", "1.5", " 12", "12a4"] {
        assert!(matches!(
            TokenAmount::from_raw(t.clone(), bad),
            Err(SwapError::InvalidAmount(_))
        ));
    }
}

#[test]
fn to_exact_renders_minimal_decimal_form() {
    let t6 = token("0xaa", 6);
    let cases = [
        ("1500000", "1.5"),
        ("1000000", "1"),
        ("123", "0.000123"),
        ("0", "0"),
        ("1234567", "1.234567"),
        ("10000001", "10.000001"),
    ];
    for (raw, expected) in cases {
        let rendered = TokenAmount::from_raw(t6.clone(), raw).unwrap().to_exact();
        assert_eq!(rendered, expected, "raw {}", raw);
    }
    let t0 = token("0xbb", 0);
    assert_eq!(TokenAmount::from_raw(t0, "42").unwrap().to_exact(), "42");
}

#[test]
fn subtraction_underflow_fails_instead_of_wrapping() {
    let t = token("0xaa", 18);
    let five = amount(&t, 5);
    let three = amount(&t, 3);
    assert_eq!(five.checked_sub(&three).unwrap().raw, BigUint::from(2u32));
    assert_eq!(three.checked_sub(&five), Err(SwapError::Underflow));
}

#[test]
fn amount_arithmetic_is_exact_and_same_token_only() {
    let t = token("0xaa", 18);
    let a = amount(&t, 7);
    let b = amount(&t, 9);
    assert_eq!(a.checked_add(&b).unwrap().raw, BigUint::from(16u32));
    assert_eq!(a.mul_scalar(3).raw, BigUint::from(21u32));
    assert!(a < b);

    let other = amount(&token("0xbb", 18), 7);
    assert!(a.partial_cmp(&other).is_none());
    assert!(a.checked_add(&other).is_err());
}

#[test]
fn token_identity_ignores_case_and_decimals() {
    let a = Token::new(56, "0xAbCd", 18);
    let b = Token::new(56, "0xabcd", 6);
    assert_eq!(a, b);
    assert_ne!(a, Token::new(1, "0xabcd", 18));
    assert!(Token::new(56, "0xaa", 18) < Token::new(56, "0xBB", 18));
}

#[test]
fn amount_out_matches_the_constant_product_formula() {
    // 1,000,000 USDC against 500 WETH, 0.3% fee, 1,000 USDC in.
    let usdc = token("0x01", 6);
    let weth = token("0x02", 18);
    let p = pool(
        amount(&usdc, 1_000_000_000_000),
        amount(&weth, 500_000_000_000_000_000_000),
    );
    let fee = SwapFee {
        numerator: 3,
        denominator: 1000,
    };

    let out = p.amount_out(&amount(&usdc, 1_000_000_000), &fee).unwrap();
    assert_eq!(out.raw, BigUint::from(498_003_490_519_951_608u128));
    assert_eq!(out.to_exact(), "0.498003490519951608");
    assert!(out.raw < BigUint::from(500_000_000_000_000_000u128));
    assert_eq!(out.token, weth);
}

#[test]
fn amount_out_rejects_zero_input_and_empty_reserves() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let fee = SwapFee {
        numerator: 3,
        denominator: 1000,
    };

    let p = pool(amount(&a, 1000), amount(&b, 1000));
    assert_eq!(
        p.amount_out(&amount(&a, 0), &fee),
        Err(SwapError::InsufficientInputAmount)
    );

    let empty = pool(amount(&a, 0), amount(&b, 1000));
    assert_eq!(
        empty.amount_out(&amount(&a, 5), &fee),
        Err(SwapError::InsufficientLiquidity)
    );

    let c = token("0xcc", 18);
    assert!(matches!(
        p.amount_out(&amount(&c, 5), &fee),
        Err(SwapError::InvalidRouteRequest(_))
    ));
}

#[test]
fn amount_out_is_monotonic_and_below_the_output_reserve() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let r = 1_000_000_000_000_000_000_000u128;
    let p = pool(amount(&a, r), amount(&b, r));
    let fee = SwapFee {
        numerator: 3,
        denominator: 1000,
    };

    let mut previous = BigUint::from(0u32);
    for input in [
        1_000_000u128,
        1_000_000_000_000,
        10u128.pow(18),
        10u128.pow(21),
        10u128.pow(24),
    ] {
        let out = p.amount_out(&amount(&a, input), &fee).unwrap();
        assert!(out.raw > previous, "input {}", input);
        assert!(out.raw < BigUint::from(r), "input {}", input);
        previous = out.raw;
    }
}

#[test]
fn search_returns_direct_and_two_hop_routes_ranked_by_output() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let c = token("0xcc", 18);
    let r = 1_000_000_000_000_000_000_000u128;
    let pools = vec![
        pool(amount(&a, r), amount(&b, r)),
        pool(amount(&b, r), amount(&c, r)),
        pool(amount(&a, r), amount(&c, r)),
    ];

    let trades = best_trade_exact_in(
        &pools,
        &amount(&a, 10_000_000_000_000_000_000),
        &c,
        &options(3, 2, 3),
    )
    .unwrap();

    assert_eq!(trades.len(), 2);
    // One swap loses less to fees than two through equally deep pools.
    assert_eq!(trades[0].route.hops(), 1);
    assert_eq!(
        trades[0].amount_out.raw,
        BigUint::from(9_871_580_343_970_612_988u128)
    );
    assert_eq!(trades[1].route.hops(), 2);
    assert_eq!(
        trades[1].amount_out.raw,
        BigUint::from(9_746_045_359_743_426_010u128)
    );
    assert_eq!(trades[1].route.tokens, vec![a.clone(), b, c]);
    assert_eq!(trades[0].amount_in.raw, trades[1].amount_in.raw);
}

#[test]
fn self_trade_and_zero_input_are_rejected() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let pools = vec![pool(amount(&a, 1000), amount(&b, 1000))];

    assert!(matches!(
        best_trade_exact_in(&pools, &amount(&a, 5), &a, &options(3, 3, 3)),
        Err(SwapError::InvalidRouteRequest(_))
    ));
    assert!(matches!(
        best_trade_exact_in(&pools, &amount(&a, 0), &b, &options(3, 3, 3)),
        Err(SwapError::InsufficientInputAmount)
    ));
}

#[test]
fn unconnected_tokens_yield_an_empty_list() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let c = token("0xcc", 18);
    let pools = vec![pool(amount(&a, 1000), amount(&b, 1000))];

    let trades = best_trade_exact_in(&pools, &amount(&a, 5), &c, &options(3, 3, 3)).unwrap();
    assert!(trades.is_empty());
}

#[test]
fn hop_limit_excludes_longer_routes() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let c = token("0xcc", 18);
    let r = 1_000_000_000_000_000_000_000u128;
    let pools = vec![
        pool(amount(&a, r), amount(&b, r)),
        pool(amount(&b, r), amount(&c, r)),
    ];
    let input = amount(&a, 1_000_000_000_000_000_000);

    let trades = best_trade_exact_in(&pools, &input, &c, &options(3, 1, 3)).unwrap();
    assert!(trades.is_empty());

    let trades = best_trade_exact_in(&pools, &input, &c, &options(3, 2, 3)).unwrap();
    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].route.hops(), 2);
}

#[test]
fn results_are_capped_sorted_and_acyclic() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let c = token("0xcc", 18);
    let d = token("0xdd", 18);
    let r = 1_000_000_000_000_000_000_000u128;
    // Fully connected graph: five distinct routes from a to d.
    let pools = vec![
        pool(amount(&a, r), amount(&b, r)),
        pool(amount(&a, r), amount(&c, r)),
        pool(amount(&a, r), amount(&d, r)),
        pool(amount(&b, r), amount(&c, 2 * r)),
        pool(amount(&b, r), amount(&d, 3 * r)),
        pool(amount(&c, r), amount(&d, 2 * r)),
    ];

    let trades = best_trade_exact_in(
        &pools,
        &amount(&a, 1_000_000_000_000_000_000),
        &d,
        &options(3, 3, 3),
    )
    .unwrap();

    assert_eq!(trades.len(), 3);
    for window in trades.windows(2) {
        assert!(window[0].amount_out.raw >= window[1].amount_out.raw);
    }
    for trade in &trades {
        assert!(trade.route.hops() <= 3);
        assert_eq!(trade.route.tokens.len(), trade.route.hops() + 1);
        assert_eq!(trade.route.tokens.first(), Some(&a));
        assert_eq!(trade.route.tokens.last(), Some(&d));
        let distinct: HashSet<&Token> = trade.route.tokens.iter().collect();
        assert_eq!(distinct.len(), trade.route.tokens.len());
    }
}

#[test]
fn duplicate_pools_are_independent_parallel_edges() {
    let a = token("0xaa", 18);
    let c = token("0xcc", 18);
    let r = 1_000_000_000_000_000_000_000u128;
    let pools = vec![
        pool(amount(&a, r), amount(&c, r)),
        pool(amount(&a, r), amount(&c, r)),
    ];

    let trades = best_trade_exact_in(
        &pools,
        &amount(&a, 1_000_000_000_000_000_000),
        &c,
        &options(3, 3, 3),
    )
    .unwrap();

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].amount_out.raw, trades[1].amount_out.raw);
    assert_eq!(trades[0].route.hops(), 1);
    assert_eq!(trades[1].route.hops(), 1);
}

#[test]
fn illiquid_pools_are_excluded_from_the_graph() {
    let a = token("0xaa", 18);
    let b = token("0xbb", 18);
    let c = token("0xcc", 18);
    let r = 1_000_000_000_000_000_000_000u128;
    let pools = vec![
        pool(amount(&a, r), amount(&c, 0)),
        pool(amount(&a, r), amount(&b, r)),
        pool(amount(&b, r), amount(&c, r)),
    ];

    let trades = best_trade_exact_in(
        &pools,
        &amount(&a, 1_000_000_000_000_000_000),
        &c,
        &options(3, 3, 3),
    )
    .unwrap();

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].route.hops(), 2);
}
