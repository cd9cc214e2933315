//! Dividend withholding and minimum-tax simulator for the Lei 15.270/2025
//! IRPF reform
//!
//! One month of dividends per paying company goes in; out comes the monthly
//! withholding at source (Art. 6º-A), the annualized minimum-tax projection
//! (Art. 16-A), and the balance due at the annual reconciliation. The
//! computation is pure and in-memory: no persistence, no sessions, no
//! network surface. Each simulation is independent and idempotent.

pub mod assumptions;
pub mod dividend;
pub mod export;
pub mod projection;
pub mod statute;

pub use assumptions::Assumptions;
pub use dividend::{CalculatorInput, DividendRecord, LoadError};
pub use projection::{CalculationResult, ProjectionEngine};
