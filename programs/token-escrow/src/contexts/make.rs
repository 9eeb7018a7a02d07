use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_2022::spl_token_2022::{
        self,
        extension::{BaseStateWithExtensions, ExtensionType, StateWithExtensions},
    },
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{errors::EscrowError, events::EscrowOpened, pda::ESCROW_SEED, state::Escrow};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Make<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,
    #[account(mint::token_program = token_program)]
    pub token_mint_a: InterfaceAccount<'info, Mint>,
    #[account(
        mint::token_program = token_program,
        constraint = token_mint_a.key() != token_mint_b.key() @ EscrowError::IdenticalMints
    )]
    pub token_mint_b: InterfaceAccount<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_a: InterfaceAccount<'info, TokenAccount>,
    // `init` fails when the address is already in use, which rejects a
    // second open for the same (maker, seed).
    #[account(
        init,
        payer = maker,
        space = Escrow::INIT_SPACE,
        seeds = [ESCROW_SEED, maker.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub escrow: Account<'info, Escrow>,
    #[account(
        init,
        payer = maker,
        associated_token::mint = token_mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Make<'info> {
    pub fn validate(&self, receive_amount: u64, deposit_amount: u64) -> Result<()> {
        require_gt!(receive_amount, 0, EscrowError::InvalidAmount);
        require_gt!(deposit_amount, 0, EscrowError::InvalidAmount);
        require_gte!(
            self.maker_token_account_a.amount,
            deposit_amount,
            EscrowError::InsufficientFunds
        );
        check_mint_extensions(&self.token_mint_a.to_account_info())?;
        check_mint_extensions(&self.token_mint_b.to_account_info())
    }

    pub fn save_escrow(&mut self, seed: u64, receive_amount: u64, bumps: &MakeBumps) -> Result<()> {
        self.escrow.set_inner(Escrow {
            maker: self.maker.key(),
            seed,
            token_mint_a: self.token_mint_a.key(),
            token_mint_b: self.token_mint_b.key(),
            receive_amount,
            bump: bumps.escrow,
        });
        Ok(())
    }

    pub fn deposit(&mut self, deposit_amount: u64) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.maker_token_account_a.to_account_info(),
            mint: self.token_mint_a.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(cpi_ctx, deposit_amount, self.token_mint_a.decimals)?;

        msg!(
            "Escrow opened: seed={}, deposit={}, receive={}",
            self.escrow.seed,
            deposit_amount,
            self.escrow.receive_amount
        );
        emit!(EscrowOpened {
            escrow: self.escrow.key(),
            maker: self.maker.key(),
            seed: self.escrow.seed,
            token_mint_a: self.token_mint_a.key(),
            token_mint_b: self.token_mint_b.key(),
            deposit_amount,
            receive_amount: self.escrow.receive_amount,
        });
        Ok(())
    }
}

/// Rejects Token-2022 mints whose extensions let the vault hold less than the
/// deposit, block its closure, or move funds without the escrow's signature.
fn check_mint_extensions(mint: &AccountInfo) -> Result<()> {
    if *mint.owner != spl_token_2022::ID {
        return Ok(());
    }

    let data = mint.try_borrow_data()?;
    let state = StateWithExtensions::<spl_token_2022::state::Mint>::unpack(&data)?;
    for extension in state.get_extension_types()? {
        match extension {
            ExtensionType::TransferFeeConfig
            | ExtensionType::TransferHook
            | ExtensionType::NonTransferable
            | ExtensionType::PermanentDelegate => {
                msg!("Unsupported mint extension: {:?}", extension);
                return err!(EscrowError::UnsupportedMint);
            }
            _ => {}
        }
    }
    Ok(())
}
