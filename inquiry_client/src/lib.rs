pub use flow::{
    ContactFormState, ContactSubmissionFlow, ContactSubmitFlowError, GENERIC_ERROR_MESSAGE,
    NETWORK_ERROR_MESSAGE,
};

mod flow;
