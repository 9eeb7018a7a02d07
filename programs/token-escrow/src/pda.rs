//! Address derivation shared by the program constraints and by clients.
//!
//! Seeds are wire format: a `u64` seed is always encoded as 8 little-endian
//! bytes, and the program id is passed in rather than read from `crate::ID`
//! so the same functions serve any deployment.

use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use solana_program::pubkey::Pubkey;

pub const ESCROW_SEED: &[u8] = b"escrow";

pub fn escrow_seed_bytes(seed: u64) -> [u8; 8] {
    seed.to_le_bytes()
}

/// Escrow record address and bump for `(maker, seed)` under `program_id`.
pub fn find_escrow_address(program_id: &Pubkey, maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ESCROW_SEED, maker.as_ref(), &escrow_seed_bytes(seed)],
        program_id,
    )
}

/// The vault is the escrow's associated token account for mint A.
pub fn find_vault_address(
    escrow: &Pubkey,
    token_mint_a: &Pubkey,
    token_program: &Pubkey,
) -> Pubkey {
    find_token_account_address(escrow, token_mint_a, token_program)
}

pub fn find_token_account_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
