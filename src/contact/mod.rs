//! Contact form submission: the state machine and the HTTP capability it uses.

pub mod submitter;
pub mod transport;

pub use submitter::{
    ContactFormSubmitter, Failure, FormSnapshot, SubmissionState, SubmitRejected,
    NETWORK_FAILURE_MESSAGE, SEND_FAILURE_MESSAGE,
};
pub use transport::{ReqwestTransport, Transport, TransportError, TransportResponse};
