pub mod dns;

pub use dns::{AnswerQueryUseCase, LookupDomainUseCase};
