#![allow(clippy::unwrap_used)]

use soroban_sdk::{testutils::Address as _, Address};
use token_sale::{Error as SaleError, SaleStatus};
use x_token::Error as TokenError;
use xtoken_tests::utils::{
    contract_utils::jump_to,
    test_fixtures::{test_env, Deployment, DeploymentConfig, RATE, SALE_CAP, TOKEN_CAP},
};

#[test]
fn test_deployment_hands_minting_to_sale() {
    let env = test_env();
    let d = Deployment::new(&env);

    assert_eq!(d.token.owner(), d.sale_id);
    assert_eq!(d.token.cap(), TOKEN_CAP);
    assert_eq!(d.token.total_supply(), 0);
    assert_eq!(d.sale.cap(), SALE_CAP);
    assert_eq!(d.sale.rate(), RATE);
    assert_eq!(d.sale.token(), d.token.address);
    assert_eq!(d.sale.beneficiary(), d.wallet);
    assert_eq!(d.sale.status(), SaleStatus::Pending);

    // The deployer gave up minting rights with ownership.
    assert_eq!(
        d.token.try_mint(&d.deployer, &d.deployer, &1),
        Err(Ok(TokenError::Unauthorized))
    );
    assert_eq!(
        d.token.try_transfer_ownership(&d.deployer, &d.deployer),
        Err(Ok(TokenError::Unauthorized))
    );
}

#[test]
fn test_full_sale_lifecycle() {
    let env = test_env();
    let d = Deployment::new(&env);
    let buyer = d.funded_buyer(10_000);

    assert_eq!(
        d.sale.try_buy_tokens(&buyer, &buyer, &1_000),
        Err(Ok(SaleError::SaleNotOpen))
    );

    d.open();
    assert!(d.sale.is_open());
    assert_eq!(d.sale.buy_tokens(&buyer, &buyer, &1_000), 1_000_000);

    assert_eq!(d.token.balance_of(&buyer), 1_000_000);
    assert_eq!(d.token.total_supply(), 1_000_000);
    assert_eq!(d.payment.balance(&buyer), 9_000);
    assert_eq!(d.payment.balance(&d.wallet), 1_000);
    assert_eq!(d.payment.balance(&d.sale_id), 0);
    assert_eq!(d.sale.tokens_sold(), 1_000_000);
    assert_eq!(d.sale.value_raised(), 1_000);
    assert_eq!(d.sale.remaining(), SALE_CAP - 1_000_000);

    // Last second of the window still sells.
    jump_to(&env, d.closing_time - 1);
    assert_eq!(d.sale.buy_tokens(&buyer, &buyer, &1), RATE);

    d.close();
    assert!(d.sale.has_closed());
    assert_eq!(
        d.sale.try_buy_tokens(&buyer, &buyer, &1),
        Err(Ok(SaleError::SaleNotOpen))
    );
    assert_eq!(d.token.balance_of(&buyer), 1_000_000 + RATE);
    assert_eq!(d.payment.balance(&d.wallet), 1_001);
}

#[test]
fn test_purchase_on_behalf_of_recipient() {
    let env = test_env();
    let d = Deployment::new(&env);
    let payer = d.funded_buyer(500);
    let recipient = Address::generate(&env);

    d.open();
    d.sale.buy_tokens(&payer, &recipient, &500);

    assert_eq!(d.token.balance_of(&payer), 0);
    assert_eq!(d.token.balance_of(&recipient), 500 * RATE);
    assert_eq!(d.payment.balance(&payer), 0);
    assert_eq!(d.payment.balance(&d.wallet), 500);
}

#[test]
fn test_sale_cap_is_reachable_and_binding() {
    let env = test_env();
    let d = Deployment::new(&env);
    let whole_sale = SALE_CAP / RATE;
    let buyer = d.funded_buyer(whole_sale + 1);

    d.open();
    d.sale.buy_tokens(&buyer, &buyer, &whole_sale);
    assert!(d.sale.cap_reached());
    assert_eq!(d.sale.remaining(), 0);

    assert_eq!(
        d.sale.try_buy_tokens(&buyer, &buyer, &1),
        Err(Ok(SaleError::SaleCapExceeded))
    );
    assert_eq!(d.token.total_supply(), SALE_CAP);
    assert_eq!(d.payment.balance(&buyer), 1);
    assert_eq!(d.sale.value_raised(), whole_sale);
}

#[test]
fn test_premint_shrinks_what_the_sale_can_mint() {
    let env = test_env();
    let premint = 40_000_000_000;
    let d = Deployment::deploy(
        &env,
        DeploymentConfig {
            premint,
            ..DeploymentConfig::default()
        },
    );
    assert_eq!(d.token.balance_of(&d.treasury), premint);

    let buyer = d.funded_buyer(20_000_000);
    d.open();

    // Within the sale's own cap but past what the ledger has left.
    let headroom_value = (TOKEN_CAP - premint) / RATE;
    assert_eq!(
        d.sale.try_buy_tokens(&buyer, &buyer, &(headroom_value + 1)),
        Err(Ok(SaleError::CapExceeded))
    );
    assert_eq!(d.sale.tokens_sold(), 0);
    assert_eq!(d.payment.balance(&buyer), 20_000_000);

    d.sale.buy_tokens(&buyer, &buyer, &headroom_value);
    assert_eq!(d.token.total_supply(), TOKEN_CAP);
    assert_eq!(
        d.sale.try_buy_tokens(&buyer, &buyer, &1),
        Err(Ok(SaleError::CapExceeded))
    );
}

#[test]
fn test_underfunded_buyer_gets_nothing() {
    let env = test_env();
    let d = Deployment::new(&env);
    let buyer = d.funded_buyer(99);

    d.open();
    assert_eq!(
        d.sale.try_buy_tokens(&buyer, &buyer, &100),
        Err(Ok(SaleError::PaymentFailed))
    );
    assert_eq!(d.token.balance_of(&buyer), 0);
    assert_eq!(d.token.total_supply(), 0);
    assert_eq!(d.sale.tokens_sold(), 0);
    assert_eq!(d.payment.balance(&buyer), 99);
}

#[test]
fn test_purchased_tokens_move_like_any_balance() {
    let env = test_env();
    let d = Deployment::new(&env);
    let buyer = d.funded_buyer(10);
    let friend = Address::generate(&env);
    let spender = Address::generate(&env);

    d.open();
    d.sale.buy_tokens(&buyer, &buyer, &10);

    d.token.transfer(&buyer, &friend, &4_000);
    d.token.approve(&buyer, &spender, &2_500);
    d.token.transfer_from(&spender, &buyer, &spender, &2_000);

    assert_eq!(d.token.balance_of(&buyer), 4_000);
    assert_eq!(d.token.balance_of(&friend), 4_000);
    assert_eq!(d.token.balance_of(&spender), 2_000);
    assert_eq!(d.token.allowance(&buyer, &spender), 500);
    assert_eq!(d.token.total_supply(), 10 * RATE);
}

#[test]
fn test_direct_payment_is_refused() {
    let env = test_env();
    let d = Deployment::new(&env);
    let buyer = d.funded_buyer(10);

    d.open();
    assert_eq!(
        d.sale.try_receive(&buyer, &10),
        Err(Ok(SaleError::DirectPaymentRejected))
    );
    assert_eq!(d.payment.balance(&buyer), 10);
    assert_eq!(d.sale.value_raised(), 0);
}
