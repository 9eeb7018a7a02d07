use anchor_lang::prelude::*;

use crate::pda;

/// Terms of one open trade. Lives at `["escrow", maker, seed_le]` and is the
/// sole authority of its vault.
#[account]
pub struct Escrow {
    pub maker: Pubkey,
    pub seed: u64,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub receive_amount: u64,
    pub bump: u8,
}

impl Space for Escrow {
    const INIT_SPACE: usize = 8 + 32 + 8 + 32 + 32 + 8 + 1;
}

impl Escrow {
    /// Vault holding the deposited mint A tokens of the escrow at `escrow`.
    pub fn vault_address(&self, escrow: &Pubkey, token_program: &Pubkey) -> Pubkey {
        pda::find_vault_address(escrow, &self.token_mint_a, token_program)
    }
}
