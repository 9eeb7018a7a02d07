use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Token mint A and token mint B must differ")]
    IdenticalMints,
    #[msg("Signer is not the maker of this escrow")]
    Unauthorized,
    #[msg("Insufficient token balance")]
    InsufficientFunds,
    #[msg("Token mint does not match the escrow")]
    MintMismatch,
    #[msg("Token mint carries an extension the escrow cannot custody")]
    UnsupportedMint,
}
