use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: amount must be greater than zero and match the escrow terms")]
    InvalidAmount,
    #[msg("Insufficient funds: source token account balance is too low")]
    InsufficientFunds,
    #[msg("Unauthorized: signer does not match the escrow maker")]
    Unauthorized,
    /// Raised structurally by the `seeds`/`associated_token` constraints
    /// (ConstraintSeeds, AccountNotAssociatedTokenAccount); listed here so
    /// the failure class is named in the IDL
    #[msg("Invalid derivation: supplied address does not match the derived address")]
    InvalidDerivation,
    /// Raised structurally when loading a settled (closed) escrow
    /// (AccountNotInitialized); listed here so the failure class is named
    /// in the IDL
    #[msg("Record not found: escrow does not exist or was already settled")]
    RecordNotFound,
}
