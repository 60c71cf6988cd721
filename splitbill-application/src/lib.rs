#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod input;
pub mod model;
pub mod ports;
pub mod session;
pub mod snapshot;

pub use error::{RenderError, SnapshotError, StoreError};
pub use input::NumericInput;
pub use model::{Initiator, PaymentAccount, RestaurantInfo};
pub use ports::{SessionStore, SummaryRenderer};
pub use session::BillSession;
pub use snapshot::{ItemRecord, PersonRecord, SessionSnapshot};
