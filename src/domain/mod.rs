//! Domain types tracked by the dashboard: ledger entries, savings goals,
//! tasks, spending categories, and the aggregate session state.

pub mod category;
pub mod goal;
pub mod state;
pub mod task;
pub mod transaction;

pub use category::{category_icon, default_categories, Category, FALLBACK_COLOR};
pub use goal::Goal;
pub use state::AppState;
pub use task::Task;
pub use transaction::{EntryKind, Transaction, TransactionInput};
