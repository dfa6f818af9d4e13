//! Commands invoked by the front-end shell
//!
//! Each command takes the shared [`AppState`](merlin_api::AppState), applies
//! one user action and returns the refreshed view. Errors are display strings.

mod navigation;
mod slippage;
mod swap;
mod tokens;
mod wallet;

pub use self::navigation::*;
pub use self::slippage::*;
pub use self::swap::*;
pub use self::tokens::*;
pub use self::wallet::*;
