//! Asynchronous values.
//!
//! # Cancellation
//!
//! Futures can be cancelled by dropping them before they finish executing.
//! This is useful when we're no longer interested in the result of an
//! operation, as it allows us to stop doing needless work. It also means that
//! a future may cancel at any `.await` point, and so just like with `?` we
//! have to be careful to roll back local state if our future halts there.
//!
//! The combinators here compose with that model rather than replace it:
//! [`FutureExt::timeout`] drops the underlying future once the deadline
//! resolves first, and [`FutureExt::delay`] simply refuses to poll it until
//! the deadline has passed.
//!
//! ```
//! use tutor::prelude::*;
//! use tutor::time::Duration;
//!
//! #[tutor::main]
//! async fn main() {
//!     let value = async { "meow" }
//!         .delay(Duration::from_millis(10))
//!         .timeout(Duration::from_millis(100))
//!         .await;
//!
//!     assert_eq!(value.unwrap(), "meow");
//! }
//! ```

mod delay;
mod future_ext;
mod timeout;

pub use delay::Delay;
pub use future_ext::FutureExt;
pub use std::future::IntoFuture;
pub use timeout::Timeout;
