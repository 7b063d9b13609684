//! Proptest generators for property-based testing.

use proptest::prelude::*;

use zksync_tx::{Order, Ratio, TimeRange, Token, Transfer, U256};

fn pow10(exponent: u32) -> U256 {
    U256::from(10u64).pow(U256::from(exponent))
}

/// Generate an amount with an exact packed representation.
pub fn packable_amount() -> impl Strategy<Value = U256> {
    (0u64..(1 << 35), 0u32..=31).prop_map(|(mantissa, exponent)| U256::from(mantissa) * pow10(exponent))
}

/// Generate a fee with an exact packed representation.
pub fn packable_fee() -> impl Strategy<Value = U256> {
    (0u64..=15, 0u32..=15).prop_map(|(mantissa, exponent)| U256::from(mantissa) * pow10(exponent))
}

/// Generate a 0x-prefixed 20-byte address with mixed-case hex.
pub fn address() -> impl Strategy<Value = String> {
    (any::<[u8; 20]>(), any::<bool>()).prop_map(|(bytes, upper)| {
        let hex = hex::encode(bytes);
        if upper {
            format!("0x{}", hex.to_uppercase())
        } else {
            format!("0x{hex}")
        }
    })
}

/// Generate a token with a 4-byte id.
pub fn token() -> impl Strategy<Value = Token> {
    (0u64..=u64::from(u32::MAX), address(), "[A-Z]{2,6}", 0u8..=18)
        .prop_map(|(id, address, symbol, decimals)| Token::new(id, address, symbol, decimals))
}

/// Generate a validity window.
pub fn time_range() -> impl Strategy<Value = TimeRange> {
    (any::<u64>(), any::<u64>()).prop_map(|(a, b)| TimeRange::new(a.min(b), a.max(b)))
}

/// Generate a ratio whose parts fit the 16-byte encoding.
pub fn ratio() -> impl Strategy<Value = Ratio> {
    (1u128.., 1u128..).prop_map(|(n, d)| Ratio::from_parts(n, d))
}

/// Parameters for generating a transfer.
#[derive(Debug, Clone)]
pub struct TransferParams {
    pub account_id: u32,
    pub from: String,
    pub to: String,
    pub token: Token,
    pub amount: U256,
    pub fee: U256,
    pub nonce: u32,
    pub time_range: TimeRange,
}

impl Arbitrary for TransferParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            any::<u32>(),
            address(),
            address(),
            token(),
            packable_amount(),
            packable_fee(),
            any::<u32>(),
            time_range(),
        )
            .prop_map(|(account_id, from, to, token, amount, fee, nonce, time_range)| TransferParams {
                account_id,
                from,
                to,
                token,
                amount,
                fee,
                nonce,
                time_range,
            })
            .boxed()
    }
}

/// Build an unsigned transfer from parameters.
pub fn transfer_from_params(params: &TransferParams) -> Transfer {
    Transfer {
        account_id: u64::from(params.account_id),
        from: params.from.clone(),
        to: params.to.clone(),
        token: params.token.clone(),
        amount: params.amount,
        fee: params.fee,
        nonce: u64::from(params.nonce),
        time_range: params.time_range,
        signature: None,
    }
}

/// Generate an unsigned order with encodable fields.
pub fn order() -> impl Strategy<Value = Order> {
    (any::<u32>(), address(), any::<u32>(), token(), token(), packable_amount(), ratio(), time_range())
        .prop_map(|(account_id, recipient, nonce, token_sell, token_buy, amount, ratio, time_range)| Order {
            account_id: u64::from(account_id),
            recipient,
            nonce: u64::from(nonce),
            token_sell,
            token_buy,
            amount,
            ratio,
            time_range,
            signature: None,
            eth_signature: None,
        })
}
