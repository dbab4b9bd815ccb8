mod submit_contact_use_case;

pub use submit_contact_use_case::{
    SubmitContactCommand, SubmitContactCommandError, SubmitContactError, SubmitContactUseCase,
};
