use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};

use crate::Result;

pub use self::form_data::*;

mod form_data;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Please select both files")]
    MissingFiles,
    #[error(transparent)]
    Aborted(JoinError),
}

/// A simulated upload in flight: the payload it carries and the timer task
/// driving the button through its pending and success states.
#[derive(Debug)]
pub struct SubmitJob {
    pub form_data: FormData,
    handle: JoinHandle<()>,
}

impl SubmitJob {
    pub(crate) fn new(form_data: FormData, handle: JoinHandle<()>) -> Self {
        Self { form_data, handle }
    }

    /// Waits until the button has been restored and hands the payload back.
    pub async fn finished(self) -> Result<FormData> {
        match self.handle.await {
            Ok(()) => Ok(self.form_data),
            Err(join_error) => Err(SubmitError::Aborted(join_error).into()),
        }
    }
}
