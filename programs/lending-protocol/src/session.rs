//! Client-side session for one connected account.
//!
//! The session owns its portfolio snapshot and the submitter that talks to the
//! wallet. Operations are checked against the pure ledger before anything is
//! sent, and the snapshot only moves forward once the submitter returns a
//! receipt. Taking `&mut self` keeps a single writer per portfolio.

use anchor_lang::prelude::*;
use thiserror::Error;

use crate::errors::{ProtocolError, ProtocolResult};
use crate::state::{Portfolio, PositionAction, PriceTable};
use crate::utils::ledger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerOperation {
    pub action: PositionAction,
    pub symbol: String,
    pub amount: u64,
}

impl LedgerOperation {
    pub fn new(action: PositionAction, symbol: &str, amount: u64) -> Self {
        Self {
            action,
            symbol: symbol.to_string(),
            amount,
        }
    }

    pub fn supply(symbol: &str, amount: u64) -> Self {
        Self::new(PositionAction::Supply, symbol, amount)
    }

    pub fn withdraw(symbol: &str, amount: u64) -> Self {
        Self::new(PositionAction::Withdraw, symbol, amount)
    }

    pub fn borrow(symbol: &str, amount: u64) -> Self {
        Self::new(PositionAction::Borrow, symbol, amount)
    }

    pub fn repay(symbol: &str, amount: u64) -> Self {
        Self::new(PositionAction::Repay, symbol, amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub signature: String,
    pub slot: u64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TxError {
    #[error("wallet is not connected")]
    NotConnected,

    #[error("request rejected by the wallet")]
    Rejected,

    #[error("transaction failed: {0}")]
    Failed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("operation rejected: {0}")]
    Protocol(ProtocolError),

    #[error(transparent)]
    Transaction(#[from] TxError),
}

impl From<ProtocolError> for SessionError {
    fn from(err: ProtocolError) -> Self {
        SessionError::Protocol(err)
    }
}

/// Signs and sends one ledger operation on behalf of the session's account.
pub trait TransactionSubmitter {
    fn submit(&mut self, operation: &LedgerOperation) -> std::result::Result<Receipt, TxError>;
}

pub struct Session<S> {
    owner: Pubkey,
    portfolio: Portfolio,
    min_health_factor_bps: u64,
    submitter: S,
    connected: bool,
}

impl<S: TransactionSubmitter> Session<S> {
    pub fn new(owner: Pubkey, portfolio: Portfolio, min_health_factor_bps: u64, submitter: S) -> Self {
        Self {
            owner,
            portfolio,
            min_health_factor_bps,
            submitter,
            connected: true,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Stop submitting until `connect` is called again. Previews keep working.
    pub fn disconnect(&mut self) {
        self.connected = false;
    }

    pub fn connect(&mut self) {
        self.connected = true;
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// The portfolio `operation` would produce, without submitting anything.
    pub fn preview(&self, operation: &LedgerOperation, table: &PriceTable) -> ProtocolResult<Portfolio> {
        let LedgerOperation { action, symbol, amount } = operation;
        match action {
            PositionAction::Supply => ledger::supply(&self.portfolio, symbol, *amount),
            PositionAction::Withdraw => ledger::withdraw(&self.portfolio, symbol, *amount, table),
            PositionAction::Borrow => ledger::borrow(
                &self.portfolio,
                symbol,
                *amount,
                table,
                self.min_health_factor_bps,
            ),
            PositionAction::Repay => ledger::repay(&self.portfolio, symbol, *amount),
        }
    }

    pub fn execute(
        &mut self,
        operation: &LedgerOperation,
        table: &PriceTable,
    ) -> std::result::Result<Receipt, SessionError> {
        if !self.connected {
            return Err(TxError::NotConnected.into());
        }

        let next = self.preview(operation, table)?;
        let receipt = self.submitter.submit(operation)?;

        msg!(
            "{:?} {} {} confirmed in slot {}",
            operation.action,
            operation.amount,
            operation.symbol,
            receipt.slot
        );
        self.portfolio = next;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[derive(Default)]
    struct RecordingSubmitter {
        sent: Vec<LedgerOperation>,
        fail_with: Option<TxError>,
    }

    impl TransactionSubmitter for RecordingSubmitter {
        fn submit(&mut self, operation: &LedgerOperation) -> std::result::Result<Receipt, TxError> {
            if let Some(err) = &self.fail_with {
                return Err(err.clone());
            }
            self.sent.push(operation.clone());
            Ok(Receipt {
                signature: format!("sig-{}", self.sent.len()),
                slot: self.sent.len() as u64,
            })
        }
    }

    fn session(submitter: RecordingSubmitter) -> Session<RecordingSubmitter> {
        Session::new(Pubkey::new_unique(), Portfolio::new(), 12_000, submitter)
    }

    #[test]
    fn test_execute_commits_after_receipt() {
        let table = demo_table();
        let mut session = session(RecordingSubmitter::default());

        session.execute(&LedgerOperation::supply("ETH", 250_000_000), &table).unwrap();
        let receipt = session
            .execute(&LedgerOperation::borrow("USDC", 5_000 * USDC), &table)
            .unwrap();

        assert_eq!(receipt.slot, 2);
        assert_eq!(session.portfolio(), &eth_usdc_portfolio());
        assert_eq!(session.submitter().sent.len(), 2);
    }

    #[test]
    fn test_protocol_rejection_is_not_submitted() {
        let table = demo_table();
        let mut session = session(RecordingSubmitter::default());
        session.execute(&LedgerOperation::supply("ETH", 250_000_000), &table).unwrap();

        let err = session
            .execute(&LedgerOperation::borrow("USDC", 6_000 * USDC), &table)
            .unwrap_err();

        assert_eq!(err, SessionError::Protocol(ProtocolError::HealthFactorTooLow));
        assert_eq!(session.submitter().sent.len(), 1);
        assert_eq!(session.portfolio().debt_amount("USDC"), 0);
    }

    #[test]
    fn test_failed_transaction_keeps_snapshot() {
        let table = demo_table();
        let mut session = session(RecordingSubmitter {
            sent: Vec::new(),
            fail_with: Some(TxError::Rejected),
        });

        let err = session
            .execute(&LedgerOperation::supply("ETH", ETH), &table)
            .unwrap_err();

        assert_eq!(err, SessionError::Transaction(TxError::Rejected));
        assert!(session.portfolio().is_empty());
    }

    #[test]
    fn test_disconnected_session_does_not_submit() {
        let table = demo_table();
        let mut session = session(RecordingSubmitter::default());
        session.disconnect();

        let err = session
            .execute(&LedgerOperation::supply("ETH", ETH), &table)
            .unwrap_err();
        assert_eq!(err, SessionError::Transaction(TxError::NotConnected));
        assert!(session.submitter().sent.is_empty());
        assert!(session.preview(&LedgerOperation::supply("ETH", ETH), &table).is_ok());

        session.connect();
        assert!(session.is_connected());
        session.execute(&LedgerOperation::supply("ETH", ETH), &table).unwrap();
        assert_eq!(session.portfolio().collateral_amount("ETH"), ETH);
    }

    #[test]
    fn test_preview_does_not_mutate() {
        let table = demo_table();
        let session = session(RecordingSubmitter::default());

        let preview = session.preview(&LedgerOperation::supply("DAI", DAI), &table).unwrap();
        assert_eq!(preview.collateral_amount("DAI"), DAI);
        assert!(session.portfolio().is_empty());
        assert!(session.submitter().sent.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TxError::Failed("timeout".into()).to_string(), "transaction failed: timeout");
        assert_eq!(
            SessionError::from(TxError::NotConnected).to_string(),
            "wallet is not connected"
        );
    }
}
