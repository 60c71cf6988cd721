use crate::{
    error::{RenderError, StoreError},
    snapshot::SessionSnapshot,
};

/// Turns summary lines into image bytes. The first line is the title.
pub trait SummaryRenderer: Send + Sync {
    fn render(&self, lines: &[String]) -> Result<Vec<u8>, RenderError>;
}

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<SessionSnapshot, StoreError>;
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;
}
