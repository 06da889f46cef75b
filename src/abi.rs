//! Contract interfaces of the Sei precompiles the panel talks to.

use alloy::{
    primitives::{Address, Bytes, U256},
    sol,
    sol_types::SolCall,
};

use crate::error::{PanelError, PanelResult};

sol! {
    /// Token-like interface exposed by the wasmd precompile.
    interface IWasmdToken {
        function balanceOf(address account) external view returns (uint256);
        function mint(address to, uint256 amount) external;
    }

    /// Staking precompile.
    interface IStaking {
        function delegate(string valAddress) external payable returns (bool success);
    }
}

pub fn encode_balance_of(account: Address) -> Bytes {
    IWasmdToken::balanceOfCall { account }.abi_encode().into()
}

pub fn decode_balance_of(data: &[u8]) -> PanelResult<U256> {
    IWasmdToken::balanceOfCall::abi_decode_returns(data).map_err(|e| PanelError::Abi(e.to_string()))
}

pub fn encode_mint(to: Address, amount: U256) -> Bytes {
    IWasmdToken::mintCall { to, amount }.abi_encode().into()
}

pub fn encode_delegate(validator: &str) -> Bytes {
    IStaking::delegateCall { valAddress: validator.to_string() }.abi_encode().into()
}

/// `mint(address,uint256)` selector.
const MINT_SELECTOR: [u8; 4] = [0x40, 0xc1, 0x0f, 0x19];

/// Hand-built `mint(address,uint256)` calldata: selector, then the address
/// and the amount each left-padded to 32 bytes.
/// This is what the raw-request mint path submits; it does not go through
/// the ABI encoder.
pub fn encode_mint_manually(to: Address, amount: U256) -> Bytes {
    [
        MINT_SELECTOR.as_slice(),
        to.into_word().as_slice(),
        amount.to_be_bytes::<32>().as_slice(),
    ]
    .concat()
    .into()
}
