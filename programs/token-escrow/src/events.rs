use anchor_lang::prelude::*;

#[event]
pub struct EscrowOpened {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub seed: u64,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub deposit_amount: u64,
    pub receive_amount: u64,
}

#[event]
pub struct EscrowExchanged {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub taker: Pubkey,
    pub seed: u64,
    /// Mint A released from the vault to the taker.
    pub amount_a: u64,
    /// Mint B paid by the taker to the maker.
    pub amount_b: u64,
}

#[event]
pub struct EscrowRefunded {
    pub escrow: Pubkey,
    pub maker: Pubkey,
    pub seed: u64,
    pub amount: u64,
}
