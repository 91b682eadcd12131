use anchor_lang::prelude::*;
use crate::errors::{ProtocolError, ProtocolResult};
use crate::utils::constants::MAX_POSITIONS;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PositionKind {
    Collateral,
    Debt,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq, InitSpace)]
pub struct Position {
    #[max_len(10)]
    pub symbol: String,

    /// Amount in the asset's base units
    pub amount: u64,
}

/// A user's supplied (collateral) and borrowed (debt) positions.
/// Each set holds at most one position per asset.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Portfolio {
    #[max_len(8)]
    pub collateral: Vec<Position>,

    #[max_len(8)]
    pub debt: Vec<Position>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn positions(&self, kind: PositionKind) -> &[Position] {
        match kind {
            PositionKind::Collateral => &self.collateral,
            PositionKind::Debt => &self.debt,
        }
    }

    fn positions_mut(&mut self, kind: PositionKind) -> &mut Vec<Position> {
        match kind {
            PositionKind::Collateral => &mut self.collateral,
            PositionKind::Debt => &mut self.debt,
        }
    }

    pub fn find(&self, kind: PositionKind, symbol: &str) -> Option<&Position> {
        self.positions(kind).iter().find(|p| p.symbol == symbol)
    }

    pub fn collateral_amount(&self, symbol: &str) -> u64 {
        self.find(PositionKind::Collateral, symbol).map_or(0, |p| p.amount)
    }

    pub fn debt_amount(&self, symbol: &str) -> u64 {
        self.find(PositionKind::Debt, symbol).map_or(0, |p| p.amount)
    }

    pub fn has_debt(&self) -> bool {
        !self.debt.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.collateral.is_empty() && self.debt.is_empty()
    }

    /// Add `amount` to the position for `symbol`, opening it if needed.
    pub(crate) fn credit(&mut self, kind: PositionKind, symbol: &str, amount: u64) -> ProtocolResult {
        let positions = self.positions_mut(kind);

        if let Some(position) = positions.iter_mut().find(|p| p.symbol == symbol) {
            position.amount = position.amount
                .checked_add(amount)
                .ok_or(ProtocolError::MathOverflow)?;
            return Ok(());
        }

        if positions.len() >= MAX_POSITIONS {
            return Err(ProtocolError::TooManyPositions);
        }

        positions.push(Position {
            symbol: symbol.to_string(),
            amount,
        });
        Ok(())
    }

    /// Remove `amount` from the position for `symbol`, dropping it at zero.
    pub(crate) fn debit(&mut self, kind: PositionKind, symbol: &str, amount: u64) -> ProtocolResult {
        let positions = self.positions_mut(kind);
        let index = positions
            .iter()
            .position(|p| p.symbol == symbol)
            .ok_or(ProtocolError::PositionNotFound)?;

        let remaining = positions[index].amount
            .checked_sub(amount)
            .ok_or(ProtocolError::InvalidAmount)?;

        if remaining == 0 {
            positions.remove(index);
        } else {
            positions[index].amount = remaining;
        }
        Ok(())
    }
}

#[account]
#[derive(InitSpace)]
pub struct UserPortfolio {
    /// Portfolio owner
    pub owner: Pubkey,

    pub portfolio: Portfolio,

    /// Timestamp when the portfolio was opened
    pub created_at: i64,

    /// Bump seed for PDA
    pub bump: u8,
}

impl UserPortfolio {
    pub const SEED_PREFIX: &'static [u8] = b"portfolio";
}
